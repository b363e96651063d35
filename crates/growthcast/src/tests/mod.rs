//! Application-level tests: form interaction and the submit cycle.

mod submit;
