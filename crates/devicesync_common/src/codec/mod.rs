mod json;

pub use json::DeviceJsonCodec;
