//! SOAP 1.1 envelope building and response parsing.
//!
//! The JIRA RPC service only needs a handful of elements from each response,
//! so the body is scanned with regular expressions instead of a full XML parser.

use std::borrow::Cow;
use std::sync::LazyLock;

use jira_auth_application::RemoteFault;
use regex::{Captures, Regex};

static FAULT_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:[\w.-]+:)?faultstring(?:\s[^>]*)?>(.*?)</(?:[\w.-]+:)?faultstring\s*>")
        .expect("valid regex")
});

static FAULT_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:[\w.-]+:)?faultcode(?:\s[^>]*)?>(.*?)</(?:[\w.-]+:)?faultcode\s*>")
        .expect("valid regex")
});

static LOGIN_RETURN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<(?:[\w.-]+:)?loginReturn(\s[^>]*?)?(?:/>|>(.*?)</(?:[\w.-]+:)?loginReturn\s*>)",
    )
    .expect("valid regex")
});

static NIL_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:[\w.-]+:)?nil\s*=\s*["'](?:true|1)["']"#).expect("valid regex")
});

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|lt|gt|amp|quot|apos);").expect("valid regex")
});

/// What a `login` response body contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResponse {
    /// The call returned. `None` means the token was nil.
    Token(Option<String>),
    /// The remote side reported a fault.
    Fault(RemoteFault),
    /// Neither a return value nor a fault was found.
    Unrecognized,
}

/// Builds the SOAP envelope for `login(username, password)`.
#[must_use]
pub fn login_envelope(username: &str, password: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
            r#"xmlns:soap="http://soap.rpc.jira.atlassian.com">"#,
            "<soapenv:Body>",
            r#"<soap:login soapenv:encodingStyle="http://schemas.xmlsoap.org/soap/encoding/">"#,
            r#"<in0 xsi:type="xsd:string">{}</in0>"#,
            r#"<in1 xsi:type="xsd:string">{}</in1>"#,
            "</soap:login>",
            "</soapenv:Body>",
            "</soapenv:Envelope>"
        ),
        escape(username),
        escape(password),
    )
}

/// Extracts the login token or the fault from a response body.
///
/// A fault takes precedence over a return value.
#[must_use]
pub fn parse_login_response(body: &str) -> LoginResponse {
    if let Some(caps) = FAULT_STRING.captures(body) {
        let message = unescape(caps[1].trim()).into_owned();
        let mut fault = RemoteFault::new(message);
        if let Some(code) = FAULT_CODE.captures(body) {
            fault = fault.with_code(unescape(code[1].trim()));
        }
        return LoginResponse::Fault(fault);
    }

    let Some(caps) = LOGIN_RETURN.captures(body) else {
        return LoginResponse::Unrecognized;
    };

    let is_nil = caps
        .get(1)
        .is_some_and(|attrs| NIL_ATTRIBUTE.is_match(attrs.as_str()));
    if is_nil {
        return LoginResponse::Token(None);
    }

    let token = caps.get(2).map_or("", |m| m.as_str());
    LoginResponse::Token(Some(unescape(token).into_owned()))
}

fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn unescape(value: &str) -> Cow<'_, str> {
    ENTITY.replace_all(value, |caps: &Captures<'_>| {
        let entity = &caps[1];
        let decoded = match entity {
            "lt" => Some('<'),
            "gt" => Some('>'),
            "amp" => Some('&'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => entity
                .strip_prefix("#x")
                .map_or_else(
                    || entity.strip_prefix('#').and_then(|d| d.parse::<u32>().ok()),
                    |hex| u32::from_str_radix(hex, 16).ok(),
                )
                .and_then(char::from_u32),
        };
        decoded.map_or_else(|| caps[0].to_string(), String::from)
    })
}
