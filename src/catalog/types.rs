//! Static type-system data for Magic Script
//!
//! Everything the catalog knows is declared here as const tables; the
//! catalog itself is just indexed views over this data. Keeping the
//! knowledge declarative makes it testable independent of control flow.

/// Canonical type name spellings
pub mod type_names {
    pub const OBJECT: &str = "Object";
    pub const NUMBER: &str = "Number";
    pub const INTEGER: &str = "Integer";
    pub const LONG: &str = "Long";
    pub const FLOAT: &str = "Float";
    pub const DOUBLE: &str = "Double";
    pub const STRING: &str = "String";
    pub const BOOLEAN: &str = "Boolean";
    pub const DATE: &str = "Date";
    pub const ARRAY: &str = "Array";
    pub const LIST: &str = "List";
    pub const MAP: &str = "Map";
    pub const FUNCTION: &str = "Function";
    pub const NULL: &str = "Null";
    pub const HTTP_RESPONSE: &str = "HttpResponse";
    pub const PAGE_RESULT: &str = "PageResult";
    pub const RESPONSE_BUILDER: &str = "ResponseBuilder";
    pub const NAMED_TABLE: &str = "NamedTable";

    /// Sentinel returned by literal classification when nothing matches.
    /// Not a catalogued type; inference maps it to OBJECT.
    pub const UNKNOWN: &str = "unknown";
}

/// All canonical types, root first
pub const CANONICAL_TYPES: &[&str] = &[
    type_names::OBJECT,
    type_names::NUMBER,
    type_names::INTEGER,
    type_names::LONG,
    type_names::FLOAT,
    type_names::DOUBLE,
    type_names::STRING,
    type_names::BOOLEAN,
    type_names::DATE,
    type_names::ARRAY,
    type_names::LIST,
    type_names::MAP,
    type_names::FUNCTION,
    type_names::NULL,
    type_names::HTTP_RESPONSE,
    type_names::PAGE_RESULT,
    type_names::RESPONSE_BUILDER,
    type_names::NAMED_TABLE,
];

/// Alias spellings -> canonical names. These double as the targets of the
/// `::type` conversion operator (`value::int`, `text::date`).
pub const TYPE_ALIASES: &[(&str, &str)] = &[
    ("int", type_names::INTEGER),
    ("integer", type_names::INTEGER),
    ("long", type_names::LONG),
    ("float", type_names::FLOAT),
    ("double", type_names::DOUBLE),
    ("number", type_names::NUMBER),
    ("string", type_names::STRING),
    ("str", type_names::STRING),
    ("bool", type_names::BOOLEAN),
    ("boolean", type_names::BOOLEAN),
    ("date", type_names::DATE),
    ("array", type_names::ARRAY),
    ("list", type_names::LIST),
    ("map", type_names::MAP),
    ("object", type_names::OBJECT),
    ("any", type_names::OBJECT),
    ("function", type_names::FUNCTION),
    ("lambda", type_names::FUNCTION),
    ("null", type_names::NULL),
];

/// Direct supertype per type (single-parent forest rooted at Object).
/// Object itself has no entry.
pub const TYPE_PARENTS: &[(&str, &str)] = &[
    (type_names::NUMBER, type_names::OBJECT),
    (type_names::INTEGER, type_names::NUMBER),
    (type_names::LONG, type_names::NUMBER),
    (type_names::FLOAT, type_names::NUMBER),
    (type_names::DOUBLE, type_names::NUMBER),
    (type_names::STRING, type_names::OBJECT),
    (type_names::BOOLEAN, type_names::OBJECT),
    (type_names::DATE, type_names::OBJECT),
    (type_names::ARRAY, type_names::OBJECT),
    (type_names::LIST, type_names::ARRAY),
    (type_names::MAP, type_names::OBJECT),
    (type_names::FUNCTION, type_names::OBJECT),
    (type_names::NULL, type_names::OBJECT),
    (type_names::HTTP_RESPONSE, type_names::OBJECT),
    (type_names::PAGE_RESULT, type_names::OBJECT),
    (type_names::RESPONSE_BUILDER, type_names::OBJECT),
    (type_names::NAMED_TABLE, type_names::OBJECT),
];

/// Implicit (widening) conversions. The blanket rule that anything converts
/// to String and Object is applied in code, not listed per type.
pub const IMPLICIT_CONVERSIONS: &[(&str, &[&str])] = &[
    (
        type_names::INTEGER,
        &[type_names::LONG, type_names::DOUBLE, type_names::NUMBER],
    ),
    (type_names::LONG, &[type_names::DOUBLE, type_names::NUMBER]),
    (type_names::FLOAT, &[type_names::DOUBLE, type_names::NUMBER]),
    (type_names::DOUBLE, &[type_names::NUMBER]),
];

/// Explicit conversions: reachable via `::type` casts or `asX()` calls
pub const EXPLICIT_CONVERSIONS: &[(&str, &[&str])] = &[
    (
        type_names::STRING,
        &[
            type_names::INTEGER,
            type_names::LONG,
            type_names::FLOAT,
            type_names::DOUBLE,
            type_names::BOOLEAN,
            type_names::DATE,
        ],
    ),
    (
        type_names::INTEGER,
        &[type_names::LONG, type_names::FLOAT, type_names::DOUBLE],
    ),
    (
        type_names::LONG,
        &[
            type_names::INTEGER,
            type_names::FLOAT,
            type_names::DOUBLE,
            type_names::DATE,
        ],
    ),
    (
        type_names::FLOAT,
        &[type_names::INTEGER, type_names::LONG, type_names::DOUBLE],
    ),
    (
        type_names::DOUBLE,
        &[type_names::INTEGER, type_names::LONG, type_names::FLOAT],
    ),
    (
        type_names::NUMBER,
        &[
            type_names::INTEGER,
            type_names::LONG,
            type_names::FLOAT,
            type_names::DOUBLE,
        ],
    ),
    (type_names::ARRAY, &[type_names::LIST]),
    (type_names::DATE, &[type_names::LONG, type_names::STRING]),
    (
        type_names::OBJECT,
        &[
            type_names::INTEGER,
            type_names::LONG,
            type_names::FLOAT,
            type_names::DOUBLE,
            type_names::STRING,
            type_names::BOOLEAN,
            type_names::DATE,
        ],
    ),
];

/// Method name sets per type, for completion filtering. Signatures live in
/// the registry's extension-method tables; these are names only.
pub const TYPE_METHODS: &[(&str, &[&str])] = &[
    (
        type_names::STRING,
        &[
            "length",
            "indexOf",
            "substring",
            "replace",
            "trim",
            "toUpperCase",
            "toLowerCase",
            "split",
            "startsWith",
            "endsWith",
            "contains",
            "isBlank",
            "isNotBlank",
        ],
    ),
    (
        type_names::NUMBER,
        &["round", "floor", "ceil", "abs", "toFixed", "asPercent"],
    ),
    (
        type_names::ARRAY,
        &[
            "size", "map", "filter", "each", "sort", "reverse", "distinct", "skip", "limit",
            "join", "first", "last", "max", "min", "sum", "avg", "contains", "group",
        ],
    ),
    (
        type_names::MAP,
        &[
            "size",
            "keys",
            "values",
            "each",
            "merge",
            "remove",
            "containsKey",
            "containsValue",
            "asArray",
        ],
    ),
    (
        type_names::DATE,
        &["format", "getTime", "addDays", "addMonths", "addYears"],
    ),
    (type_names::BOOLEAN, &["not"]),
    (
        type_names::OBJECT,
        &[
            "asInt",
            "asLong",
            "asFloat",
            "asDouble",
            "asString",
            "asDate",
            "asBoolean",
            "is",
            "isNull",
            "isNotNull",
            "ifNull",
        ],
    ),
    (
        type_names::HTTP_RESPONSE,
        &["getBody", "getStatus", "getHeaders", "getCookies", "json"],
    ),
    (
        type_names::RESPONSE_BUILDER,
        &[
            "json",
            "text",
            "page",
            "redirect",
            "download",
            "image",
            "addHeader",
            "setHeader",
            "addCookie",
            "end",
        ],
    ),
    (
        type_names::NAMED_TABLE,
        &[
            "insert", "update", "save", "select", "selectOne", "page", "where", "column",
            "primary",
        ],
    ),
];

/// Property name sets per type (no-call member access)
pub const TYPE_PROPERTIES: &[(&str, &[&str])] = &[
    (
        type_names::HTTP_RESPONSE,
        &["body", "status", "headers", "cookies"],
    ),
    (type_names::PAGE_RESULT, &["total", "list"]),
];

/// Default value literals per type. Domain objects and Date have none.
pub const DEFAULT_VALUES: &[(&str, &str)] = &[
    (type_names::STRING, "\"\""),
    (type_names::INTEGER, "0"),
    (type_names::LONG, "0L"),
    (type_names::FLOAT, "0.0F"),
    (type_names::DOUBLE, "0.0"),
    (type_names::NUMBER, "0"),
    (type_names::BOOLEAN, "false"),
    (type_names::ARRAY, "[]"),
    (type_names::LIST, "[]"),
    (type_names::MAP, "{}"),
    (type_names::OBJECT, "null"),
    (type_names::NULL, "null"),
];

/// Ancestor walks refuse to run longer than this; the shipped hierarchy is
/// three levels deep, so hitting the bound means the data is malformed.
pub const MAX_HIERARCHY_DEPTH: usize = 32;
