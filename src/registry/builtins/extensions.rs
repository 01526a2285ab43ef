//! Extension method tables, keyed by receiver type
//!
//! These methods are available on any expression whose inferred type
//! matches the bucket (or descends from it: Integer finds the Number
//! bucket, List finds Array). The name sets mirror the catalog's per-type
//! member lists.

use super::{MethodSpec, ParamSpec};

pub(crate) const EXTENSION_METHODS: &[(&str, &[MethodSpec])] = &[
    ("String", STRING_EXTENSIONS),
    ("Number", NUMBER_EXTENSIONS),
    ("Array", ARRAY_EXTENSIONS),
    ("Map", MAP_EXTENSIONS),
    ("Date", DATE_EXTENSIONS),
    ("Boolean", BOOLEAN_EXTENSIONS),
    ("HttpResponse", HTTP_RESPONSE_EXTENSIONS),
    ("NamedTable", NAMED_TABLE_EXTENSIONS),
    ("Object", OBJECT_EXTENSIONS),
];

const STRING_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new("length", &[], "Integer", "Number of characters"),
    MethodSpec::new(
        "indexOf",
        &[ParamSpec::req("search", "String", "text to find")],
        "Integer",
        "Index of the first occurrence, -1 when absent",
    ),
    MethodSpec::new(
        "substring",
        &[
            ParamSpec::req("start", "Integer", "start index, inclusive"),
            ParamSpec::opt("end", "Integer", "end index, exclusive", None),
        ],
        "String",
        "Slice by index",
    ),
    MethodSpec::new(
        "replace",
        &[
            ParamSpec::req("from", "String", "text to find"),
            ParamSpec::req("to", "String", "replacement"),
        ],
        "String",
        "Replace every occurrence",
    ),
    MethodSpec::new("trim", &[], "String", "Strip leading and trailing whitespace"),
    MethodSpec::new("toUpperCase", &[], "String", "Uppercase copy"),
    MethodSpec::new("toLowerCase", &[], "String", "Lowercase copy"),
    MethodSpec::new(
        "split",
        &[ParamSpec::req("separator", "String", "separator pattern")],
        "Array",
        "Split on a separator",
    )
    .example("var parts = line.split(',');"),
    MethodSpec::new(
        "startsWith",
        &[ParamSpec::req("prefix", "String", "prefix to test")],
        "Boolean",
        "Whether the text starts with a prefix",
    ),
    MethodSpec::new(
        "endsWith",
        &[ParamSpec::req("suffix", "String", "suffix to test")],
        "Boolean",
        "Whether the text ends with a suffix",
    ),
    MethodSpec::new(
        "contains",
        &[ParamSpec::req("search", "String", "text to find")],
        "Boolean",
        "Whether the text contains a substring",
    ),
    MethodSpec::new("isBlank", &[], "Boolean", "Whether the text is empty or whitespace"),
    MethodSpec::new("isNotBlank", &[], "Boolean", "Whether the text has content"),
];

const NUMBER_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "round",
        &[ParamSpec::opt("scale", "Integer", "decimal places", Some("0"))],
        "Number",
        "Round to a number of decimal places",
    ),
    MethodSpec::new("floor", &[], "Number", "Round down"),
    MethodSpec::new("ceil", &[], "Number", "Round up"),
    MethodSpec::new("abs", &[], "Number", "Absolute value"),
    MethodSpec::new(
        "toFixed",
        &[ParamSpec::req("digits", "Integer", "decimal places")],
        "String",
        "Format with a fixed number of decimals",
    ),
    MethodSpec::new(
        "asPercent",
        &[ParamSpec::opt("scale", "Integer", "decimal places", Some("2"))],
        "String",
        "Format as a percentage string",
    ),
];

const ARRAY_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new("size", &[], "Integer", "Number of elements"),
    MethodSpec::new(
        "map",
        &[ParamSpec::req("mapper", "Function", "transform per element")],
        "Array",
        "Transform every element",
    )
    .example("var names = users.map(u => u.name);"),
    MethodSpec::new(
        "filter",
        &[ParamSpec::req("predicate", "Function", "keep test per element")],
        "Array",
        "Keep elements matching a predicate",
    )
    .example("var adults = users.filter(u => u.age >= 18);"),
    MethodSpec::new(
        "each",
        &[ParamSpec::req("action", "Function", "action per element")],
        "Array",
        "Run an action for every element",
    ),
    MethodSpec::new(
        "sort",
        &[ParamSpec::opt("comparator", "Function", "pairwise ordering", None)],
        "Array",
        "Sorted copy",
    ),
    MethodSpec::new("reverse", &[], "Array", "Reversed copy"),
    MethodSpec::new("distinct", &[], "Array", "Copy without duplicates"),
    MethodSpec::new(
        "skip",
        &[ParamSpec::req("count", "Integer", "elements to drop")],
        "Array",
        "Copy without the first elements",
    ),
    MethodSpec::new(
        "limit",
        &[ParamSpec::req("count", "Integer", "elements to keep")],
        "Array",
        "Copy of at most the first elements",
    ),
    MethodSpec::new(
        "join",
        &[ParamSpec::opt("separator", "String", "separator between values", Some("\",\""))],
        "String",
        "Join elements into one string",
    ),
    MethodSpec::new("first", &[], "Object", "First element, null when empty"),
    MethodSpec::new("last", &[], "Object", "Last element, null when empty"),
    MethodSpec::new("max", &[], "Object", "Largest element"),
    MethodSpec::new("min", &[], "Object", "Smallest element"),
    MethodSpec::new("sum", &[], "Number", "Sum of the elements"),
    MethodSpec::new("avg", &[], "Number", "Average of the elements"),
    MethodSpec::new(
        "contains",
        &[ParamSpec::req("value", "Object", "value to find")],
        "Boolean",
        "Whether the array contains a value",
    ),
    MethodSpec::new(
        "group",
        &[ParamSpec::req("classifier", "Function", "key per element")],
        "Map",
        "Group elements by a computed key",
    )
    .example("var byDept = users.group(u => u.dept);"),
];

const MAP_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new("size", &[], "Integer", "Number of entries"),
    MethodSpec::new("keys", &[], "Array", "All keys"),
    MethodSpec::new("values", &[], "Array", "All values"),
    MethodSpec::new(
        "each",
        &[ParamSpec::req("action", "Function", "action per entry")],
        "Map",
        "Run an action for every entry",
    ),
    MethodSpec::new(
        "merge",
        &[ParamSpec::req("other", "Map", "entries to add")],
        "Map",
        "Copy with another map's entries merged in",
    ),
    MethodSpec::new(
        "remove",
        &[ParamSpec::req("key", "Object", "key to drop")],
        "Map",
        "Copy without a key",
    ),
    MethodSpec::new(
        "containsKey",
        &[ParamSpec::req("key", "Object", "key to test")],
        "Boolean",
        "Whether the map has a key",
    ),
    MethodSpec::new(
        "containsValue",
        &[ParamSpec::req("value", "Object", "value to test")],
        "Boolean",
        "Whether the map has a value",
    ),
    MethodSpec::new("asArray", &[], "Array", "Entries as an array of key/value maps"),
];

const DATE_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "format",
        &[ParamSpec::opt("pattern", "String", "format pattern", Some("\"yyyy-MM-dd HH:mm:ss\""))],
        "String",
        "Format as text",
    )
    .example("var day = created.format('yyyy-MM-dd');"),
    MethodSpec::new("getTime", &[], "Long", "Milliseconds since the epoch"),
    MethodSpec::new(
        "addDays",
        &[ParamSpec::req("days", "Integer", "days to add, negative to subtract")],
        "Date",
        "Copy shifted by days",
    ),
    MethodSpec::new(
        "addMonths",
        &[ParamSpec::req("months", "Integer", "months to add")],
        "Date",
        "Copy shifted by months",
    ),
    MethodSpec::new(
        "addYears",
        &[ParamSpec::req("years", "Integer", "years to add")],
        "Date",
        "Copy shifted by years",
    ),
];

const BOOLEAN_EXTENSIONS: &[MethodSpec] =
    &[MethodSpec::new("not", &[], "Boolean", "Logical negation")];

const HTTP_RESPONSE_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new("getBody", &[], "Object", "Raw response body"),
    MethodSpec::new("getStatus", &[], "Integer", "HTTP status code"),
    MethodSpec::new("getHeaders", &[], "Map", "Response headers"),
    MethodSpec::new("getCookies", &[], "Map", "Response cookies"),
    MethodSpec::new("json", &[], "Object", "Body parsed as JSON"),
];

/// The fluent single-table interface behind `db.table(name)`. Builder
/// steps return the table again; terminal queries mirror the db module.
const NAMED_TABLE_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "column",
        &[ParamSpec::req("name", "String", "column to include")],
        "NamedTable",
        "Restrict the columns handled",
    ),
    MethodSpec::new(
        "primary",
        &[ParamSpec::req("name", "String", "primary key column")],
        "NamedTable",
        "Name the primary key column",
    ),
    MethodSpec::new(
        "where",
        &[ParamSpec::opt("condition", "Map", "column/value conditions", None)],
        "NamedTable",
        "Add query conditions",
    ),
    MethodSpec::new(
        "insert",
        &[ParamSpec::req("record", "Map", "column/value pairs")],
        "Object",
        "Insert one record, yielding its primary key",
    )
    .example("db.table('sys_user').insert({ name: 'a' });"),
    MethodSpec::new(
        "update",
        &[ParamSpec::req("record", "Map", "column/value pairs")],
        "Integer",
        "Update by primary key, yielding the affected row count",
    ),
    MethodSpec::new(
        "save",
        &[ParamSpec::req("record", "Map", "column/value pairs")],
        "Object",
        "Insert or update depending on the primary key",
    ),
    MethodSpec::new("select", &[], "Array", "All matching rows"),
    MethodSpec::new("selectOne", &[], "Object", "The first matching row"),
    MethodSpec::new(
        "page",
        &[
            ParamSpec::opt("limit", "Integer", "page size", None),
            ParamSpec::opt("offset", "Integer", "rows to skip", None),
        ],
        "PageResult",
        "One page of matching rows",
    ),
];

const OBJECT_EXTENSIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "asInt",
        &[ParamSpec::opt("default", "Integer", "value when conversion fails", Some("0"))],
        "Integer",
        "Convert to an integer",
    )
    .example("var page = request.getParameter('page').asInt(1);"),
    MethodSpec::new(
        "asLong",
        &[ParamSpec::opt("default", "Long", "value when conversion fails", Some("0L"))],
        "Long",
        "Convert to a long",
    ),
    MethodSpec::new(
        "asFloat",
        &[ParamSpec::opt("default", "Float", "value when conversion fails", Some("0.0F"))],
        "Float",
        "Convert to a float",
    ),
    MethodSpec::new(
        "asDouble",
        &[ParamSpec::opt("default", "Double", "value when conversion fails", Some("0.0"))],
        "Double",
        "Convert to a double",
    ),
    MethodSpec::new(
        "asString",
        &[ParamSpec::opt("default", "String", "value when null", None)],
        "String",
        "Convert to a string",
    ),
    MethodSpec::new(
        "asDate",
        &[ParamSpec::opt("pattern", "String", "parse pattern for text input", None)],
        "Date",
        "Convert to a date",
    ),
    MethodSpec::new("asBoolean", &[], "Boolean", "Convert to a boolean"),
    MethodSpec::new(
        "is",
        &[ParamSpec::req("type", "String", "type name to test")],
        "Boolean",
        "Whether the value has a given type",
    ),
    MethodSpec::new("isNull", &[], "Boolean", "Whether the value is null"),
    MethodSpec::new("isNotNull", &[], "Boolean", "Whether the value is not null"),
    MethodSpec::new(
        "ifNull",
        &[ParamSpec::req("fallback", "Object", "value to use when null")],
        "Object",
        "The value, or a fallback when it is null",
    ),
];
