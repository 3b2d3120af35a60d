pub mod modules;
pub mod shared;

pub use modules::topic;

#[cfg(test)]
mod tests;
