#![allow(missing_docs)]

pub(crate) mod http;

pub(crate) use http::{
    assert_content_type, assert_failure_message, assert_status_ok, parse_json_body,
};
