/*!
 * Common test utilities shared across the dialectai test suite
 */

use dialectai::app_config::{Config, TranslationProvider};
use dialectai::providers::mock::MockProvider;
use dialectai::translation::TranslationService;

/// Initialize logging for tests honoring RUST_LOG, ignoring repeat calls
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a test configuration backed by the mock provider
pub fn get_test_config() -> Config {
    Config {
        provider: TranslationProvider::Mock,
        ..Config::default()
    }
}

/// Create a translation service backed by a working mock provider
pub fn working_service() -> TranslationService {
    TranslationService::with_provider(Box::new(MockProvider::working()))
}

/// Create a translation service backed by a failing mock provider
pub fn failing_service() -> TranslationService {
    TranslationService::with_provider(Box::new(MockProvider::failing()))
}
