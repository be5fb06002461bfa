/// Crate-wide result type; typed failures are `DescriptorError` values wrapped in `anyhow::Error`
pub type Result<T> = std::result::Result<T, anyhow::Error>;
