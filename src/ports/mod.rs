/// Ports module defining interfaces for hexagonal architecture
///
/// The command line adapter drives the use cases directly, so only outbound
/// (driven) ports are defined here.
pub mod outbound;
