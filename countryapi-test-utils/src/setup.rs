//! Setup macros for the common table layouts.

/// Build a [`TestContext`](crate::TestContext) with tables for the given entities
///
/// Entities are created in the order given.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Build a [`TestContext`](crate::TestContext) with the continent, country, favourite &
/// visited tables
#[macro_export]
macro_rules! test_setup_with_country_tables {
    () => {{
        $crate::TestBuilder::new().with_country_tables().build().await
    }};
}
