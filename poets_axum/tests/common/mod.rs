pub mod fixtures;

pub use fixtures::*;
pub use mock_browser::MockBrowser;
pub use test_server::TestServer;
