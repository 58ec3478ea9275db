//! Registered names for the parts of a media type tree.
//!
//! Tree form: `type "/" [prefix "."] subtype ["+" suffix] *(";" parameter)`

// Top-level types registered by IANA as of Dec 2020, plus "chemical".
pub const AUDIO: &str = "audio";
pub const APPLICATION: &str = "application";
/// Common but unofficial top-level name.
pub const CHEMICAL: &str = "chemical";
pub const EXAMPLE: &str = "example";
pub const FONT: &str = "font";
pub const IMAGE: &str = "image";
pub const MESSAGE: &str = "message";
pub const MULTIPART: &str = "multipart";
pub const TEXT: &str = "text";
pub const VIDEO: &str = "video";

/// Standard tree, for officially registered types. Has no wire form.
pub const STANDARD: &str = "";
/// Private tree, for exclusively private types.
pub const PRIVATE: &str = "x";
/// Vanity tree, for experimental or non-public types.
pub const VANITY: &str = "prs";
/// Vendor tree, for vendor specific public types.
pub const VENDOR: &str = "vnd";

pub const BER: &str = "ber";
pub const CBOR: &str = "cbor";
pub const CBOR_SEQ: &str = "cbor-seq";
pub const DER: &str = "der";
pub const FASTINFOSET: &str = "fastinfoset";
pub const JSON: &str = "json";
pub const JSON_SEQ: &str = "json-seq";
pub const XML: &str = "xml";
pub const WBXML: &str = "wbxml";
pub const ZIP: &str = "zip";
pub const GZIP: &str = "gzip";

/// Known top-level types.
pub const TOP_LEVEL_TYPES: &[&str] = &[
    AUDIO,
    APPLICATION,
    CHEMICAL,
    EXAMPLE,
    FONT,
    IMAGE,
    MESSAGE,
    MULTIPART,
    TEXT,
    VIDEO,
];

/// Known registration trees.
pub const PREFIXES: &[&str] = &[STANDARD, PRIVATE, VANITY, VENDOR];

/// Known structured syntax suffixes.
pub const SUFFIXES: &[&str] = &[
    BER,
    CBOR,
    CBOR_SEQ,
    DER,
    FASTINFOSET,
    JSON,
    JSON_SEQ,
    XML,
    WBXML,
    ZIP,
    GZIP,
];
