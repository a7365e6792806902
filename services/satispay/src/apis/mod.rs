//! Request and response shapes for the gateway resources.
//!
//! Each function returns an inert [`CallDescriptor`](paysign_core::CallDescriptor)
//! that can be dispatched with any strategy of [`SatispayClient`](crate::SatispayClient).

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

pub mod authorization;
pub mod consumer;
pub mod payment;
pub mod signature_test;

/// Characters escaped when a value is used as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}
