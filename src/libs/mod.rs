pub mod io;
pub mod lcsk;
pub mod matches;
