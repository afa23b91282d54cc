use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Call `with_view_tables()` to get the schema the bot runs against, then
/// call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_view_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Whether to apply the application's migrations during `build()`.
    ///
    /// Migrations create tables together with their indexes, so uniqueness rules are
    /// enforced in tests exactly as in production.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with an empty schema.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with no tables configured
    pub fn new() -> Self {
        Self { migrations: false }
    }

    /// Adds all tables required for view store operations.
    ///
    /// The tables are created by running the migrator, including the unique index on
    /// `(guild_id, view_type)`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_view_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_view_tables(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// Creates an in-memory SQLite database connection and applies the migrations if
    /// `with_view_tables()` was called.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or run migrations
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        } else {
            setup.database().await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
