//! Synthetic identifiers derived from loop indices.
//!
//! Every function here is a pure function of its integer inputs: the same
//! indices always give the same names, and the random coverage values never
//! feed back into naming. Tables are indexed modulo their length, so large
//! indices wrap around instead of running out.

pub const DIRS: &[&str] = &[
    "src", "lib", "core", "api", "handlers", "middleware", "services", "models",
    "utils", "config", "db", "auth", "routes", "controllers", "views", "templates",
    "helpers", "validators", "serializers", "tasks", "workers", "consumers",
    "producers", "adapters", "clients", "providers", "repositories", "factories",
    "strategies", "observers", "decorators",
];

pub const SUBCOMPONENTS: &[&str] = &[
    "user", "account", "session", "payment", "order", "product", "cart",
    "inventory", "shipping", "notification", "email", "search", "cache",
    "logging", "metrics", "health", "admin", "report", "export", "import",
    "sync", "migration", "backup", "queue", "scheduler", "webhook", "oauth",
    "token", "permission", "role", "audit", "analytics",
];

pub const EXTENSIONS: &[&str] = &[".py", ".js", ".ts", ".rs", ".go", ".java", ".rb"];

pub const METHOD_PREFIXES: &[&str] = &[
    "get", "set", "create", "update", "delete", "find", "list", "validate",
    "process", "handle", "parse", "format", "convert", "serialize", "deserialize",
    "encode", "decode", "encrypt", "decrypt", "hash", "verify", "check", "is",
    "has", "can", "should", "init", "setup", "teardown", "cleanup", "reset",
    "refresh", "load", "save", "fetch", "send", "receive", "publish", "subscribe",
    "connect", "disconnect", "open", "close", "read", "write", "flush", "sync",
    "merge", "split", "filter", "map", "reduce", "sort", "search", "index",
    "compute", "calculate", "transform", "normalize", "sanitize", "escape", "render",
];

pub const METHOD_SUFFIXES: &[&str] = &[
    "data", "result", "response", "request", "config", "options", "params",
    "args", "context", "state", "status", "info", "details", "metadata", "record",
    "entry", "item", "element", "node", "value", "key", "id", "name", "type",
    "format", "schema", "model", "entity", "resource", "connection", "session",
    "transaction", "batch", "chunk", "page", "token", "header", "body", "payload",
    "message", "event", "signal", "callback", "handler", "listener", "observer",
    "subscriber", "worker",
];

/// Cyclic table lookup.
pub fn lookup(table: &'static [&'static str], idx: usize) -> &'static str {
    table[idx % table.len()]
}

/// Package names pair a directory with a subcomponent, e.g. `handlers.payment`.
pub fn package_name(pkg_idx: usize) -> String {
    format!("{}.{}", lookup(DIRS, pkg_idx), lookup(SUBCOMPONENTS, pkg_idx))
}

/// Source file path for a class, `dir/name[_N].ext`.
///
/// The `_N` suffix is omitted for the first class of a package.
pub fn filename(pkg_idx: usize, cls_idx: usize) -> String {
    let dir = lookup(DIRS, pkg_idx);
    let sub = lookup(SUBCOMPONENTS, pkg_idx * 7 + cls_idx);
    let ext = lookup(EXTENSIONS, pkg_idx + cls_idx);

    if cls_idx > 0 {
        format!("{}/{}_{}{}", dir, sub, cls_idx, ext)
    } else {
        format!("{}/{}{}", dir, sub, ext)
    }
}

/// Dotted class name: the filename without its extension, `/` turned into `.`.
pub fn classname(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    };
    stem.replace('/', ".")
}

pub fn method_name(idx: usize) -> String {
    format!(
        "{}_{}",
        lookup(METHOD_PREFIXES, idx),
        lookup(METHOD_SUFFIXES, idx * 3 + 7)
    )
}

/// Index fed to [`method_name`] for a method within a class.
pub fn method_index(pkg_idx: usize, cls_idx: usize, m_idx: usize) -> usize {
    pkg_idx * 100 + cls_idx * 10 + m_idx
}

/// Planned class count for a package, 5 to 15.
pub fn classes_in_package(pkg_idx: usize) -> usize {
    5 + (pkg_idx * 7 + 3) % 11
}

/// Method count for a class, 3 to 14.
pub fn methods_in_class(pkg_idx: usize, cls_idx: usize) -> usize {
    3 + (pkg_idx + cls_idx) % 12
}

/// Line count for one method body, 3 to 8.
pub fn lines_in_method(m_idx: usize, cls_idx: usize) -> usize {
    3 + (m_idx * 3 + cls_idx) % 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(DIRS.len(), 31);
        assert_eq!(SUBCOMPONENTS.len(), 32);
        assert_eq!(EXTENSIONS.len(), 7);
        assert_eq!(METHOD_PREFIXES.len(), 62);
        assert_eq!(METHOD_SUFFIXES.len(), 48);
    }

    #[test]
    fn first_class_has_no_suffix() {
        assert_eq!(filename(0, 0), "src/user.py");
        assert_eq!(filename(0, 1), "src/account_1.js");
        // pkg 1: dir "lib", sub index 7 + 2 = 9, ext index 3
        assert_eq!(filename(1, 2), "lib/notification_2.rs");
    }

    #[test]
    fn lookups_wrap_around() {
        assert_eq!(lookup(DIRS, 31), "src");
        assert_eq!(package_name(0), "src.user");
        assert_eq!(package_name(31), "src.analytics");
        assert_eq!(package_name(32), "lib.user");
    }

    #[test]
    fn classname_strips_extension_and_dots_the_path() {
        assert_eq!(classname("src/user.py"), "src.user");
        assert_eq!(classname("lib/notification_2.rs"), "lib.notification_2");
        assert_eq!(classname("noext"), "noext");
    }

    #[test]
    fn method_names_pair_prefix_and_suffix() {
        // suffix index 0 * 3 + 7 = 7 -> "args"
        assert_eq!(method_name(0), "get_args");
        // prefix 1 "set", suffix 10 "status"
        assert_eq!(method_name(1), "set_status");
        assert_eq!(method_name(method_index(0, 1, 2)), method_name(12));
    }

    #[test]
    fn derivation_is_pure() {
        for pkg in 0..40 {
            for cls in 0..classes_in_package(pkg) {
                assert_eq!(filename(pkg, cls), filename(pkg, cls));
                assert_eq!(method_name(method_index(pkg, cls, 3)), method_name(method_index(pkg, cls, 3)));
            }
        }
    }

    #[test]
    fn shape_counts_stay_in_range() {
        for pkg in 0..200 {
            assert!((5..=15).contains(&classes_in_package(pkg)));
            for cls in 0..15 {
                assert!((3..=14).contains(&methods_in_class(pkg, cls)));
            }
        }
        for m in 0..20 {
            for cls in 0..15 {
                assert!((3..=8).contains(&lines_in_method(m, cls)));
            }
        }
    }
}
