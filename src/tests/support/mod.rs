pub mod database_fixture;

pub use database_fixture::DatabaseFixture;

pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
