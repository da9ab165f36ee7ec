// module declaration
pub mod core;
pub mod events;
pub mod models;
pub mod search;
pub mod ui_state;

// export App and related types
pub use self::core::App;
pub use self::events::AppAction;
pub use self::models::{Phase, SearchRequest, Tab, WalletSnapshot};
