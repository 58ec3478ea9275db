//! Built-in media type and extension tables.

/// Canonical key to wire form. Aliases such as `"image/jpg"` render as their
/// canonical type.
pub(crate) static BUILTIN_MIMES: &[(&str, &str)] = &[
    ("audio/3gpp", "audio/3gpp"),
    ("video/3gpp", "video/3gpp"),
    ("audio/3gpp2", "audio/3gpp2"),
    ("video/3gpp2", "video/3gpp2"),
    ("audio/aac", "audio/aac"),
    ("application/x-abiword", "application/x-abiword"),
    ("application/x-freearc", "application/x-freearc"),
    ("image/avif", "image/avif"),
    ("video/x-msvideo", "video/x-msvideo"),
    ("application/octet-stream", "application/octet-stream"),
    ("image/bmp", "image/bmp"),
    ("application/x-bzip", "application/x-bzip"),
    ("application/x-bzip2", "application/x-bzip2"),
    ("application/x-cdf", "application/x-cdf"),
    ("application/x-csh", "application/x-csh"),
    ("text/css", "text/css"),
    ("text/csv", "text/csv"),
    ("application/msword", "application/msword"),
    ("application/epub+zip", "application/epub+zip"),
    ("application/gzip", "application/gzip"),
    ("image/gif", "image/gif"),
    ("text/html", "text/html"),
    ("text/htm", "text/html"),
    ("text/calendar", "text/calendar"),
    ("image/vnd.microsoft.icon", "image/vnd.microsoft.icon"),
    ("application/java-archive", "application/java-archive"),
    ("image/jpeg", "image/jpeg"),
    ("image/jpg", "image/jpeg"),
    ("application/json", "application/json"),
    ("application/ld+json", "application/ld+json"),
    ("audio/x-midi", "audio/x-midi"),
    ("audio/midi", "audio/midi"),
    ("text/javascript", "text/javascript"),
    ("audio/mpeg", "audio/mpeg"),
    ("video/mp4", "video/mp4"),
    ("video/mpeg", "video/mpeg"),
    ("audio/ogg", "audio/ogg"),
    ("video/ogg", "video/ogg"),
    ("application/ogg", "application/ogg"),
    ("audio/opus", "audio/opus"),
    ("font/otf", "font/otf"),
    ("image/png", "image/png"),
    ("application/pdf", "application/pdf"),
    ("application/x-httpd-php", "application/x-httpd-php"),
    ("application/vnd.rar", "application/vnd.rar"),
    ("application/rtf", "application/rtf"),
    ("application/x-sh", "application/x-sh"),
    ("image/svg+xml", "image/svg+xml"),
    ("application/x-tar", "application/x-tar"),
    ("image/tiff", "image/tiff"),
    ("video/mp2t", "video/mp2t"),
    ("font/ttf", "font/ttf"),
    ("text/plain", "text/plain"),
    ("audio/wav", "audio/wav"),
    ("audio/webm", "audio/webm"),
    ("video/webm", "video/webm"),
    ("image/webp", "image/webp"),
    ("font/woff", "font/woff"),
    ("font/woff2", "font/woff2"),
    ("application/xml", "application/xml"),
    ("application/zip", "application/zip"),
    ("application/vnd.visio", "application/vnd.visio"),
    ("application/xhtml+xml", "application/xhtml+xml"),
    ("application/x-7z-compressed", "application/x-7z-compressed"),
    ("application/vnd.ms-excel", "application/vnd.ms-excel"),
    ("application/vnd.amazon.ebook", "application/vnd.amazon.ebook"),
    ("application/vnd.ms-fontobject", "application/vnd.ms-fontobject"),
    ("application/vnd.ms-powerpoint", "application/vnd.ms-powerpoint"),
    ("application/vnd.mozilla.xul+xml", "application/vnd.mozilla.xul+xml"),
    ("application/vnd.apple.installer+xml", "application/vnd.apple.installer+xml"),
    ("application/vnd.oasis.opendocument.text", "application/vnd.oasis.opendocument.text"),
    (
        "application/vnd.oasis.opendocument.spreadsheet",
        "application/vnd.oasis.opendocument.spreadsheet",
    ),
    (
        "application/vnd.oasis.opendocument.presentation",
        "application/vnd.oasis.opendocument.presentation",
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
];

/// Extension (with leading dot) to the canonical keys it may stand for.
pub(crate) static BUILTIN_EXTENSIONS: &[(&str, &[&str])] = &[
    (".3gp", &["audio/3gpp", "video/3gpp"]),
    (".3g2", &["audio/3gpp2", "video/3gpp2"]),
    (".7z", &["application/x-7z-compressed"]),
    (".aac", &["audio/aac"]),
    (".abw", &["application/x-abiword"]),
    (".arc", &["application/x-freearc"]),
    (".avif", &["image/avif"]),
    (".avi", &["video/x-msvideo"]),
    (".azw", &["application/vnd.amazon.ebook"]),
    (".bin", &["application/octet-stream"]),
    (".bmp", &["image/bmp"]),
    (".bz", &["application/x-bzip"]),
    (".bz2", &["application/x-bzip2"]),
    (".cda", &["application/x-cdf"]),
    (".csh", &["application/x-csh"]),
    (".css", &["text/css"]),
    (".csv", &["text/csv"]),
    (".doc", &["application/msword"]),
    (
        ".docx",
        &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"],
    ),
    (".eot", &["application/vnd.ms-fontobject"]),
    (".epub", &["application/epub+zip"]),
    (".gz", &["application/gzip"]),
    (".gif", &["image/gif"]),
    (".htm", &["text/html"]),
    (".html", &["text/html"]),
    (".ico", &["image/vnd.microsoft.icon"]),
    (".ics", &["text/calendar"]),
    (".jar", &["application/java-archive"]),
    (".jpeg", &["image/jpeg"]),
    (".jpg", &["image/jpeg"]),
    (".json", &["application/json"]),
    (".jsonld", &["application/ld+json"]),
    (".mid", &["audio/midi", "audio/x-midi"]),
    (".midi", &["audio/midi", "audio/x-midi"]),
    (".mjs", &["text/javascript"]),
    (".mp3", &["audio/mpeg"]),
    (".mp4", &["video/mp4"]),
    (".mpeg", &["video/mpeg"]),
    (".mpkg", &["application/vnd.apple.installer+xml"]),
    (".odp", &["application/vnd.oasis.opendocument.presentation"]),
    (".ods", &["application/vnd.oasis.opendocument.spreadsheet"]),
    (".odt", &["application/vnd.oasis.opendocument.text"]),
    (".oga", &["audio/ogg"]),
    (".ogv", &["video/ogg"]),
    (".ogx", &["application/ogg"]),
    (".opus", &["audio/opus"]),
    (".otf", &["font/otf"]),
    (".png", &["image/png"]),
    (".pdf", &["application/pdf"]),
    (".php", &["application/x-httpd-php"]),
    (".ppt", &["application/vnd.ms-powerpoint"]),
    (
        ".pptx",
        &["application/vnd.openxmlformats-officedocument.presentationml.presentation"],
    ),
    (".rar", &["application/vnd.rar"]),
    (".rtf", &["application/rtf"]),
    (".sh", &["application/x-sh"]),
    (".svg", &["image/svg+xml"]),
    (".tar", &["application/x-tar"]),
    (".tif", &["image/tiff"]),
    (".tiff", &["image/tiff"]),
    (".ts", &["video/mp2t"]),
    (".ttf", &["font/ttf"]),
    (".txt", &["text/plain"]),
    (".vsd", &["application/vnd.visio"]),
    (".wav", &["audio/wav"]),
    (".weba", &["audio/webm"]),
    (".webm", &["video/webm"]),
    (".webp", &["image/webp"]),
    (".woff", &["font/woff"]),
    (".woff2", &["font/woff2"]),
    (".xhtml", &["application/xhtml+xml"]),
    (".xls", &["application/vnd.ms-excel"]),
    (
        ".xlsx",
        &["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"],
    ),
    (".xml", &["application/xml"]),
    (".xul", &["application/vnd.mozilla.xul+xml"]),
    (".zip", &["application/zip"]),
];
