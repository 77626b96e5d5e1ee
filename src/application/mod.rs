//! Application layer orchestrating a lookup request.
//!
//! `LookupService` owns the record store, the access gate and the rate table.
//! A caller first opens a `Session` with a credential, then resolves student
//! ids through it. Each lookup is independent and leaves no state behind.

pub mod lookup;
