pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_JWT_SECRET,
        fixtures::{auth, factory},
        test_setup_with_country_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
