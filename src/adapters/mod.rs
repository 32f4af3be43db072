// Adapters layer: transports that expose the registry to the outside world.

pub mod http;
