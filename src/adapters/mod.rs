/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports,
/// providing the actual integration with the BoM API, the filesystem
/// and the console.
pub mod outbound;
