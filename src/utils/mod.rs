mod text;
pub use text::*;

mod service_info_log;
pub use service_info_log::*;

mod mocks;
pub use mocks::*;
