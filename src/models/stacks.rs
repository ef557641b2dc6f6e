// Tech stack and framework reference data
//
// Codes are short, minified identifiers used as the leading components of
// the enhanced name format: {stack}-{framework}-{word}-{suffix}.

/// Tech stack codes with human-readable descriptions.
pub const TECH_STACKS: &[(&str, &str)] = &[
    ("fejs", "Frontend JavaScript"),
    ("fets", "Frontend TypeScript"),
    ("bepy", "Backend Python"),
    ("bens", "Backend Node.js"),
    ("bejv", "Backend Java"),
    ("fsjs", "Full Stack JavaScript"),
    ("dogo", "DevOps Go"),
    ("mokt", "Mobile Kotlin"),
    ("mosw", "Mobile Swift"),
    ("dspyt", "Data Science Python"),
    ("mlpy", "Machine Learning Python"),
    ("berb", "Backend Ruby"),
    ("becp", "Backend C++"),
    ("fsts", "Full Stack TypeScript"),
    ("dopy", "DevOps Python"),
    ("dsr", "Data Science R"),
    ("mlr", "Machine Learning R"),
    ("bers", "Backend Rust"),
    ("fedt", "Frontend Dart"),
    ("mofl", "Mobile Flutter"),
    ("dors", "DevOps Rust"),
    ("beph", "Backend PHP"),
    ("becs", "Backend C#"),
    ("fspy", "Full Stack Python"),
    ("donj", "DevOps Node.js"),
    ("dojv", "DevOps Java"),
    ("dssc", "Data Science Scala"),
    ("mljl", "Machine Learning Julia"),
];

/// Framework codes with human-readable descriptions.
pub const FRAMEWORKS: &[(&str, &str)] = &[
    // Frontend / full stack
    ("rct", "React"),
    ("vue", "Vue.js"),
    ("ng", "Angular"),
    ("svelte", "Svelte"),
    ("nxt", "Next.js"),
    ("nuxt", "Nuxt.js"),
    ("grt", "Gatsby"),
    ("pre", "Preact"),
    ("sol", "Solid"),
    ("qwik", "Qwik"),
    // Node.js backend
    ("exp", "Express"),
    ("fast", "FastAPI"),
    ("koa", "Koa"),
    ("hel", "Hapi"),
    ("nest", "NestJS"),
    ("type", "TypeORM"),
    ("seq", "Sequelize"),
    ("pr", "Prisma"),
    ("dr", "Drizzle"),
    ("knx", "Knex"),
    // Python
    ("dja", "Django"),
    ("flk", "Flask"),
    ("fas", "FastAPI"),
    ("py", "Pyramid"),
    ("tur", "Tornado"),
    ("chalc", "Chalice"),
    ("zap", "Zappa"),
    // Java
    ("spr", "Spring"),
    ("jvax", "Jakarta EE"),
    ("mic", "Micronaut"),
    ("quark", "Quarkus"),
    ("vertx", "Vert.x"),
    ("drop", "Dropwizard"),
    ("weld", "Weld"),
    ("arq", "Arquillian"),
    // Go
    ("gor", "Gin"),
    ("htt", "HTTPRouter"),
    ("chir", "Chi"),
    ("eve", "Echo"),
    ("fib", "Fiber"),
    ("gof", "Go-Framework"),
    ("rel", "Revel"),
    ("beego", "Beego"),
    // Ruby
    ("rls", "Rails"),
    ("sin", "Sinatra"),
    ("grap", "Grape"),
    ("pad", "Padrino"),
    ("han", "Hanami"),
    // PHP
    ("lav", "Laravel"),
    ("sym", "Symfony"),
    ("slim", "Slim"),
    ("fat", "Fat-Free"),
    ("cake", "CakePHP"),
    ("code", "CodeIgniter"),
    ("phal", "Phalcon"),
    ("zend", "Zend"),
    // .NET
    ("asp", "ASP.NET Core"),
    ("blaz", "Blazor"),
    ("nfx", ".NET Framework"),
    // Mobile
    ("flt", "Flutter"),
    ("rnm", "React Native"),
    ("nativ", "NativeScript"),
    ("ionic", "Ionic"),
    ("cap", "Capacitor"),
    ("expo", "Expo"),
    ("mon", "Monaca"),
    ("ons", "Onsen UI"),
    // JVM / infra
    ("kt", "Ktor"),
    ("finc", "Finatra"),
    ("twil", "Twirl"),
    ("play", "Play Framework"),
    ("akka", "Akka"),
    ("lag", "Lagom"),
    ("glue", "Gluecodium"),
    // Data science / machine learning
    ("tf", "TensorFlow"),
    ("pt", "PyTorch"),
    ("ker", "Keras"),
    ("jup", "Jupyter"),
    ("dg", "Dask"),
    ("spk", "Spark"),
    ("h2o", "H2O"),
    ("xgb", "XGBoost"),
    // Generic
    ("web", "Web"),
    ("http", "HTTP Server"),
    ("api", "API"),
    ("serv", "Server"),
    ("arch", "Architecture"),
    ("bld", "Build"),
    ("tool", "Tool"),
];

/// Compatible framework codes per tech stack (many-to-many relation).
pub const STACK_FRAMEWORKS: &[(&str, &[&str])] = &[
    (
        "fejs",
        &[
            "rct", "vue", "ng", "svelte", "nxt", "nuxt", "grt", "pre", "sol", "qwik",
            "flt", "rnm", "nativ", "ionic", "cap", "expo", "mon", "ons",
        ],
    ),
    (
        "fets",
        &[
            "rct", "vue", "ng", "svelte", "nxt", "nuxt", "grt", "pre", "sol", "qwik",
            "flt", "rnm", "nativ", "ionic", "cap", "expo", "mon", "ons",
        ],
    ),
    (
        "bepy",
        &[
            "dja", "flk", "fas", "py", "tur", "chalc", "zap",
            "spr", "mic", "quark", "drop",
        ],
    ),
    (
        "bens",
        &[
            "exp", "fast", "koa", "hel", "nest",
            "type", "seq", "pr", "dr", "knx",
        ],
    ),
    (
        "bejv",
        &["spr", "jvax", "mic", "quark", "vertx", "drop", "weld", "arq"],
    ),
    (
        "fsjs",
        &[
            "rct", "vue", "ng", "svelte", "nxt", "nuxt", "grt", "pre", "sol", "qwik",
            "exp", "fast", "koa", "hel", "nest",
            "web", "http", "api", "serv", "arch", "bld", "tool",
        ],
    ),
    (
        "dogo",
        &[
            "gor", "htt", "eve", "fib", "gof", "rel", "beego",
            "kt", "finc", "twil", "play", "akka", "lag", "glue",
        ],
    ),
    ("mokt", &["flt", "cap", "exp", "mon", "ons"]),
    ("mosw", &["flt", "cap", "exp", "mon", "ons"]),
    ("dspyt", &["tf", "pt", "ker", "jup", "dg", "spk", "h2o", "xgb"]),
    ("mlpy", &["tf", "pt", "ker", "jup", "dg", "spk", "h2o", "xgb"]),
    ("berb", &["rls", "sin", "grap", "pad", "han"]),
    ("becp", &["web", "http", "api", "serv", "arch", "bld", "tool"]),
    (
        "fsts",
        &[
            "rct", "vue", "ng", "svelte", "nxt", "nuxt", "grt", "pre", "sol", "qwik",
            "exp", "fast", "koa", "hel", "nest",
            "type", "seq", "pr", "dr", "knx",
            "web", "http", "api", "serv", "arch", "bld", "tool",
        ],
    ),
    (
        "dopy",
        &[
            "fas", "py", "tur", "chalc", "zap",
            "web", "http", "api", "serv", "arch", "bld", "tool",
        ],
    ),
    ("dsr", &["jup", "dg", "spk", "h2o", "xgb"]),
    ("mlr", &["jup", "dg", "spk", "h2o", "xgb"]),
    ("bers", &["web", "http", "api", "serv", "arch", "bld", "tool"]),
    (
        "fedt",
        &["flt", "rnm", "nativ", "ionic", "cap", "expo", "mon", "ons"],
    ),
    ("mofl", &["flt", "cap", "exp", "mon", "ons"]),
    ("dors", &["web", "http", "api", "serv", "arch", "bld", "tool"]),
    (
        "beph",
        &["lav", "sym", "slim", "fat", "cake", "code", "phal", "zend"],
    ),
    ("becs", &["asp", "blaz", "nfx", "serv", "http", "web"]),
    (
        "fspy",
        &[
            "dja", "flk", "fas", "py", "tur", "chalc", "zap",
            "web", "http", "api", "serv", "arch", "bld", "tool",
        ],
    ),
    (
        "donj",
        &[
            "exp", "fast", "koa", "hel", "nest",
            "type", "seq", "pr", "dr", "knx",
            "web", "http", "api", "serv", "arch", "bld", "tool",
        ],
    ),
    (
        "dojv",
        &[
            "spr", "jvax", "mic", "quark", "vertx", "drop", "weld", "arq",
            "web", "http", "api", "serv", "arch", "bld", "tool",
        ],
    ),
    ("dssc", &["spk", "akka", "lag", "jup", "dg"]),
    ("mljl", &["jup", "dg", "spk", "h2o", "xgb"]),
];
