mod tokens;
pub use tokens::{TokenStore, TOKEN_KEY};

mod memory;
pub use memory::MemoryTokens;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokens;
