pub mod collection;
pub mod session_pref;
