//! Integration tests against a live MySQL server.
//!
//! Ignored by default. Run with a scratch database:
//! `DATABASE_URL=mysql://... cargo test -p lf_infra -- --ignored`
