//! Global function tables, grouped by category

use super::{MethodSpec, ParamSpec};

pub(crate) const GLOBAL_FUNCTIONS: &[(&str, &[MethodSpec])] = &[
    ("aggregate", AGGREGATE_FUNCTIONS),
    ("math", MATH_FUNCTIONS),
    ("string", STRING_FUNCTIONS),
    ("date", DATE_FUNCTIONS),
    ("array", ARRAY_FUNCTIONS),
    ("utility", UTILITY_FUNCTIONS),
    ("debug", DEBUG_FUNCTIONS),
];

const AGGREGATE_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "count",
        &[ParamSpec::req("target", "Array", "values to count")],
        "Integer",
        "Count the elements of a collection",
    )
    .example("var n = count(rows);"),
    MethodSpec::new(
        "sum",
        &[ParamSpec::req("target", "Array", "values to add")],
        "Number",
        "Sum the elements of a collection",
    ),
    MethodSpec::new(
        "avg",
        &[ParamSpec::req("target", "Array", "values to average")],
        "Number",
        "Average the elements of a collection",
    ),
    MethodSpec::new(
        "max",
        &[ParamSpec::req("target", "Array", "values to compare")],
        "Object",
        "Largest element of a collection",
    ),
    MethodSpec::new(
        "min",
        &[ParamSpec::req("target", "Array", "values to compare")],
        "Object",
        "Smallest element of a collection",
    ),
    MethodSpec::new(
        "group_concat",
        &[
            ParamSpec::req("target", "Array", "values to join"),
            ParamSpec::opt("separator", "String", "separator between values", Some("\",\"")),
        ],
        "String",
        "Join a collection into one string",
    )
    .example("var ids = group_concat(rows.map(r => r.id));"),
];

const MATH_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "round",
        &[
            ParamSpec::req("value", "Number", "value to round"),
            ParamSpec::opt("scale", "Integer", "decimal places", Some("0")),
        ],
        "Number",
        "Round to a number of decimal places",
    )
    .example("var price = round(total / count, 2);"),
    MethodSpec::new(
        "floor",
        &[ParamSpec::req("value", "Number", "value to floor")],
        "Number",
        "Round down to the nearest integer",
    ),
    MethodSpec::new(
        "ceil",
        &[ParamSpec::req("value", "Number", "value to ceil")],
        "Number",
        "Round up to the nearest integer",
    ),
    MethodSpec::new(
        "abs",
        &[ParamSpec::req("value", "Number", "value")],
        "Number",
        "Absolute value",
    ),
    MethodSpec::new("random", &[], "Double", "A random number in [0, 1)"),
    MethodSpec::new(
        "percent",
        &[
            ParamSpec::req("value", "Number", "ratio to format"),
            ParamSpec::opt("scale", "Integer", "decimal places", Some("2")),
        ],
        "String",
        "Format a ratio as a percentage string",
    ),
];

const STRING_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "is_blank",
        &[ParamSpec::req("text", "String", "text to test")],
        "Boolean",
        "Whether the text is null, empty, or whitespace",
    )
    .example("if (is_blank(name)) { exit 400, 'name required'; }"),
    MethodSpec::new(
        "not_blank",
        &[ParamSpec::req("text", "String", "text to test")],
        "Boolean",
        "Whether the text has non-whitespace content",
    ),
    MethodSpec::new(
        "lower",
        &[ParamSpec::req("text", "String", "text to convert")],
        "String",
        "Lowercase the text",
    ),
    MethodSpec::new(
        "upper",
        &[ParamSpec::req("text", "String", "text to convert")],
        "String",
        "Uppercase the text",
    ),
    MethodSpec::new(
        "substring",
        &[
            ParamSpec::req("text", "String", "source text"),
            ParamSpec::req("start", "Integer", "start index, inclusive"),
            ParamSpec::opt("end", "Integer", "end index, exclusive", None),
        ],
        "String",
        "Slice the text by index",
    ),
    MethodSpec::new(
        "replace",
        &[
            ParamSpec::req("text", "String", "source text"),
            ParamSpec::req("from", "String", "text to find"),
            ParamSpec::req("to", "String", "replacement"),
        ],
        "String",
        "Replace every occurrence of a substring",
    ),
    MethodSpec::new(
        "split",
        &[
            ParamSpec::req("text", "String", "source text"),
            ParamSpec::req("separator", "String", "separator pattern"),
        ],
        "Array",
        "Split the text on a separator",
    ),
    MethodSpec::new(
        "join",
        &[
            ParamSpec::req("parts", "Array", "values to join"),
            ParamSpec::req("separator", "String", "separator between values"),
        ],
        "String",
        "Join values into one string",
    ),
    MethodSpec::new(
        "concat",
        &[ParamSpec::req("values", "Object", "values to concatenate")],
        "String",
        "Concatenate values into one string",
    ),
];

const DATE_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new("now", &[], "Date", "The current date and time")
        .example("var created = now();"),
    MethodSpec::new(
        "current_timestamp",
        &[],
        "Long",
        "The current time in milliseconds since the epoch",
    ),
    MethodSpec::new(
        "date_format",
        &[
            ParamSpec::req("date", "Date", "date to format"),
            ParamSpec::opt("pattern", "String", "format pattern", Some("\"yyyy-MM-dd HH:mm:ss\"")),
        ],
        "String",
        "Format a date as text",
    )
    .example("var label = date_format(now(), 'yyyy-MM-dd');"),
    MethodSpec::new(
        "to_date",
        &[
            ParamSpec::req("text", "String", "date text"),
            ParamSpec::opt("pattern", "String", "format pattern", Some("\"yyyy-MM-dd HH:mm:ss\"")),
        ],
        "Date",
        "Parse text into a date",
    ),
];

const ARRAY_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "new_array",
        &[ParamSpec::opt("values", "Object", "initial elements", None)],
        "Array",
        "Create a new array",
    ),
    MethodSpec::new("new_list", &[], "List", "Create a new list"),
    MethodSpec::new("new_map", &[], "Map", "Create a new map"),
    MethodSpec::new(
        "range",
        &[
            ParamSpec::req("start", "Integer", "first value, inclusive"),
            ParamSpec::req("end", "Integer", "last value, inclusive"),
        ],
        "Array",
        "An array of consecutive integers",
    )
    .example("var pages = range(1, totalPages);"),
];

const UTILITY_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new("uuid", &[], "String", "A random UUID string")
        .example("var id = uuid();"),
    MethodSpec::new(
        "is_null",
        &[ParamSpec::req("value", "Object", "value to test")],
        "Boolean",
        "Whether the value is null",
    ),
    MethodSpec::new(
        "not_null",
        &[ParamSpec::req("value", "Object", "value to test")],
        "Boolean",
        "Whether the value is not null",
    ),
    MethodSpec::new(
        "ifnull",
        &[
            ParamSpec::req("value", "Object", "value to test"),
            ParamSpec::req("fallback", "Object", "value to use when null"),
        ],
        "Object",
        "The value, or a fallback when it is null",
    ),
    MethodSpec::new(
        "md5",
        &[ParamSpec::req("text", "String", "text to hash")],
        "String",
        "MD5 hash of the text, hex encoded",
    ),
];

const DEBUG_FUNCTIONS: &[MethodSpec] = &[
    MethodSpec::new(
        "print",
        &[ParamSpec::req("value", "Object", "value to print")],
        "Null",
        "Print a value to the console without a newline",
    ),
    MethodSpec::new(
        "println",
        &[ParamSpec::req("value", "Object", "value to print")],
        "Null",
        "Print a value to the console with a newline",
    ),
];
