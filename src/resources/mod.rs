// External resources — the reference word list and where artifacts live.

pub mod download;
pub mod wordlist;
