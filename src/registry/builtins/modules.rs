//! Builtin module tables: db, http, request, response, env, log, magic

use super::{MethodSpec, ModuleSpec, ParamSpec};

pub(crate) const BUILTIN_MODULES: &[ModuleSpec] = &[
    ModuleSpec::new(
        "db",
        "Database access: queries, updates, paging, caching and transactions",
        "database",
        DB_METHODS,
    ),
    ModuleSpec::new(
        "http",
        "Outgoing HTTP calls, either one-shot or via a request builder",
        "network",
        HTTP_METHODS,
    ),
    ModuleSpec::new(
        "request",
        "The incoming HTTP request: parameters, headers, uploaded files",
        "web",
        REQUEST_METHODS,
    ),
    ModuleSpec::new(
        "response",
        "Builds the API's HTTP response; every method chains",
        "web",
        RESPONSE_METHODS,
    ),
    ModuleSpec::new("env", "Environment and configuration values", "system", ENV_METHODS),
    ModuleSpec::new("log", "Structured logging to the service log", "logging", LOG_METHODS),
    ModuleSpec::new(
        "magic",
        "Invoke other API endpoints and functions in-process",
        "system",
        MAGIC_METHODS,
    ),
];

const DB_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "select",
        &[ParamSpec::req("sql", "String", "SQL query text")],
        "Array",
        "Execute a query and return all rows",
    )
    .returns("every matching row as a list of maps")
    .example("var users = db.select('select * from sys_user');"),
    MethodSpec::new(
        "selectOne",
        &[ParamSpec::req("sql", "String", "SQL query text")],
        "Object",
        "Execute a query and return the first row",
    )
    .returns("the first row, or null when the result is empty")
    .example("var user = db.selectOne('select * from sys_user where id = #{id}');"),
    MethodSpec::new(
        "selectInt",
        &[ParamSpec::req("sql", "String", "SQL query text")],
        "Integer",
        "Execute a query and return a single integer value",
    )
    .returns("the first column of the first row as an integer")
    .example("var total = db.selectInt('select count(*) from sys_user');"),
    MethodSpec::new(
        "selectValue",
        &[ParamSpec::req("sql", "String", "SQL query text")],
        "Object",
        "Execute a query and return a single scalar value",
    )
    .returns("the first column of the first row"),
    MethodSpec::new(
        "page",
        &[
            ParamSpec::req("sql", "String", "SQL query text"),
            ParamSpec::opt("limit", "Integer", "page size", None),
            ParamSpec::opt("offset", "Integer", "number of rows to skip", None),
        ],
        "PageResult",
        "Execute a query with automatic paging",
    )
    .returns("the page's rows plus the total row count")
    .example("return db.page('select * from sys_user');"),
    MethodSpec::new(
        "insert",
        &[ParamSpec::req("sql", "String", "SQL insert statement")],
        "Object",
        "Execute an insert statement",
    )
    .returns("the generated primary key, if any"),
    MethodSpec::new(
        "update",
        &[ParamSpec::req("sql", "String", "SQL update or delete statement")],
        "Integer",
        "Execute an update or delete statement",
    )
    .returns("the number of affected rows")
    .example("var changed = db.update('delete from sys_user where id = #{id}');"),
    MethodSpec::new(
        "cache",
        &[
            ParamSpec::req("name", "String", "cache region name"),
            ParamSpec::opt("ttl", "Long", "time to live in milliseconds", None),
        ],
        "db",
        "Route the next query through a named cache",
    )
    .returns("the db module itself, for chaining a query call")
    .example("var rows = db.cache('hot', 60000L).select('select * from sys_dict');"),
    MethodSpec::new(
        "transaction",
        &[ParamSpec::req("action", "Function", "callback running inside the transaction")],
        "Object",
        "Run a callback inside a database transaction",
    )
    .returns("whatever the callback returns")
    .example("db.transaction(() => { db.update(a); db.update(b); });"),
    MethodSpec::new(
        "table",
        &[ParamSpec::req("name", "String", "table name")],
        "NamedTable",
        "Open a fluent single-table interface",
    )
    .returns("a query builder bound to the table")
    .example("db.table('sys_user').where().eq('status', 1).select();"),
];

const HTTP_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "get",
        &[
            ParamSpec::req("url", "String", "target URL"),
            ParamSpec::opt("params", "Map", "query parameters", None),
        ],
        "HttpResponse",
        "Send a GET request",
    )
    .returns("the remote response")
    .example("var resp = http.get('https://example.com/api/users');"),
    MethodSpec::new(
        "post",
        &[
            ParamSpec::req("url", "String", "target URL"),
            ParamSpec::opt("body", "Object", "request body", None),
        ],
        "HttpResponse",
        "Send a POST request",
    )
    .returns("the remote response")
    .example("var resp = http.post('https://example.com/api/users', { name: 'jo' });"),
    MethodSpec::new(
        "put",
        &[
            ParamSpec::req("url", "String", "target URL"),
            ParamSpec::opt("body", "Object", "request body", None),
        ],
        "HttpResponse",
        "Send a PUT request",
    ),
    MethodSpec::new(
        "delete",
        &[ParamSpec::req("url", "String", "target URL")],
        "HttpResponse",
        "Send a DELETE request",
    ),
    MethodSpec::new(
        "patch",
        &[
            ParamSpec::req("url", "String", "target URL"),
            ParamSpec::opt("body", "Object", "request body", None),
        ],
        "HttpResponse",
        "Send a PATCH request",
    ),
    MethodSpec::new(
        "head",
        &[ParamSpec::req("url", "String", "target URL")],
        "HttpResponse",
        "Send a HEAD request",
    ),
    MethodSpec::new(
        "connect",
        &[ParamSpec::req("url", "String", "target URL")],
        "http",
        "Start building a request against a URL",
    )
    .returns("the http module itself, for chaining builder calls")
    .example("http.connect(url).header('X-Token', token).param('q', q).execute();"),
    MethodSpec::new(
        "param",
        &[
            ParamSpec::req("name", "String", "parameter name"),
            ParamSpec::req("value", "Object", "parameter value"),
        ],
        "http",
        "Add a query parameter to the request being built",
    ),
    MethodSpec::new(
        "header",
        &[
            ParamSpec::req("name", "String", "header name"),
            ParamSpec::req("value", "String", "header value"),
        ],
        "http",
        "Add a header to the request being built",
    ),
    MethodSpec::new(
        "body",
        &[ParamSpec::req("data", "Object", "request body")],
        "http",
        "Set the body of the request being built",
    ),
    MethodSpec::new("execute", &[], "HttpResponse", "Send the built request")
        .returns("the remote response"),
];

const REQUEST_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "getParameter",
        &[ParamSpec::req("name", "String", "parameter name")],
        "String",
        "Read a single query or form parameter",
    )
    .example("var keyword = request.getParameter('keyword');"),
    MethodSpec::new(
        "getValues",
        &[ParamSpec::req("name", "String", "parameter name")],
        "Array",
        "Read all values of a repeated parameter",
    ),
    MethodSpec::new(
        "getHeader",
        &[ParamSpec::req("name", "String", "header name")],
        "String",
        "Read a request header",
    ),
    MethodSpec::new("getHeaders", &[], "Map", "All request headers as a map"),
    MethodSpec::new(
        "getFile",
        &[ParamSpec::req("name", "String", "form field name")],
        "Object",
        "Read a single uploaded file",
    ),
    MethodSpec::new(
        "getFiles",
        &[ParamSpec::req("name", "String", "form field name")],
        "Array",
        "Read all uploaded files of a form field",
    ),
    MethodSpec::new("getClientIP", &[], "String", "The caller's IP address"),
];

const RESPONSE_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "json",
        &[ParamSpec::req("data", "Object", "value to serialize")],
        "ResponseBuilder",
        "Respond with a JSON body",
    )
    .example("return response.json({ code: 0, data: rows });"),
    MethodSpec::new(
        "text",
        &[ParamSpec::req("content", "String", "plain text body")],
        "ResponseBuilder",
        "Respond with plain text",
    ),
    MethodSpec::new(
        "page",
        &[
            ParamSpec::req("total", "Long", "total row count"),
            ParamSpec::req("values", "Array", "current page rows"),
        ],
        "ResponseBuilder",
        "Respond with the standard paged envelope",
    )
    .example("return response.page(total, rows);"),
    MethodSpec::new(
        "redirect",
        &[ParamSpec::req("url", "String", "redirect target")],
        "ResponseBuilder",
        "Respond with a redirect",
    ),
    MethodSpec::new(
        "download",
        &[
            ParamSpec::req("data", "Object", "file content"),
            ParamSpec::req("filename", "String", "suggested file name"),
        ],
        "ResponseBuilder",
        "Respond with a file download",
    ),
    MethodSpec::new(
        "image",
        &[
            ParamSpec::req("data", "Object", "image bytes"),
            ParamSpec::opt("mime", "String", "image MIME type", Some("\"image/png\"")),
        ],
        "ResponseBuilder",
        "Respond with an image",
    ),
    MethodSpec::new(
        "addHeader",
        &[
            ParamSpec::req("name", "String", "header name"),
            ParamSpec::req("value", "String", "header value"),
        ],
        "ResponseBuilder",
        "Append a response header",
    ),
    MethodSpec::new(
        "setHeader",
        &[
            ParamSpec::req("name", "String", "header name"),
            ParamSpec::req("value", "String", "header value"),
        ],
        "ResponseBuilder",
        "Set a response header, replacing previous values",
    ),
    MethodSpec::new(
        "addCookie",
        &[
            ParamSpec::req("name", "String", "cookie name"),
            ParamSpec::req("value", "String", "cookie value"),
        ],
        "ResponseBuilder",
        "Append a response cookie",
    ),
    MethodSpec::new("end", &[], "ResponseBuilder", "Finish the response without a body"),
];

const ENV_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "get",
        &[
            ParamSpec::req("key", "String", "configuration key"),
            ParamSpec::opt("default", "String", "value when the key is absent", None),
        ],
        "String",
        "Read a configuration or environment value",
    )
    .example("var profile = env.get('spring.profiles.active', 'dev');"),
];

const LOG_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "info",
        &[
            ParamSpec::req("message", "String", "log message, `{}` placeholders allowed"),
            ParamSpec::opt("args", "Object", "placeholder values", None),
        ],
        "Null",
        "Log at info level",
    )
    .example("log.info('imported {} rows', count);"),
    MethodSpec::new(
        "debug",
        &[
            ParamSpec::req("message", "String", "log message"),
            ParamSpec::opt("args", "Object", "placeholder values", None),
        ],
        "Null",
        "Log at debug level",
    ),
    MethodSpec::new(
        "warn",
        &[
            ParamSpec::req("message", "String", "log message"),
            ParamSpec::opt("args", "Object", "placeholder values", None),
        ],
        "Null",
        "Log at warn level",
    ),
    MethodSpec::new(
        "error",
        &[
            ParamSpec::req("message", "String", "log message"),
            ParamSpec::opt("args", "Object", "placeholder values", None),
        ],
        "Null",
        "Log at error level",
    ),
    MethodSpec::new(
        "trace",
        &[
            ParamSpec::req("message", "String", "log message"),
            ParamSpec::opt("args", "Object", "placeholder values", None),
        ],
        "Null",
        "Log at trace level",
    ),
];

const MAGIC_METHODS: &[MethodSpec] = &[
    MethodSpec::new(
        "call",
        &[
            ParamSpec::req("method", "String", "HTTP method of the target endpoint"),
            ParamSpec::req("path", "String", "endpoint path"),
            ParamSpec::opt("params", "Map", "call parameters", None),
        ],
        "Object",
        "Invoke another API endpoint in-process",
    )
    .returns("the endpoint's result")
    .example("var result = magic.call('GET', '/user/list', { size: 10 });"),
    MethodSpec::new(
        "execute",
        &[
            ParamSpec::req("group", "String", "function group name"),
            ParamSpec::req("name", "String", "function name"),
            ParamSpec::opt("params", "Map", "call parameters", None),
        ],
        "Object",
        "Invoke a reusable function by group and name",
    )
    .returns("the function's result"),
];
