pub mod composer;
pub mod customer;
pub mod person;
pub mod session;
pub mod team;

#[cfg(test)]
mod test;
