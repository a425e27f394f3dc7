//! Comment syntax per file type
//!
//! Maps editor file-type identifiers to the comment delimiters a header is
//! wrapped in. Lookup is total: identifiers missing from both tables get
//! [`CommentStyle::DEFAULT`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// How a header line is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// Single-line comment running to end of line: `# text`
    Line { prefix: &'static str },
    /// Delimited comment: `<!-- text -->`
    Block {
        prefix: &'static str,
        suffix: &'static str,
    },
}

const LINE_COMMENTS: &[(&str, &[&str])] = &[
    (
        "// ",
        &[
            "c", "cpp", "csharp", "cuda-cpp", "d", "dart", "fsharp", "gleam", "glsl", "go",
            "groovy", "hlsl", "java", "javascript", "javascriptreact", "jsonc", "kotlin", "less",
            "objective-c", "objective-cpp", "php", "proto3", "rust", "scala", "scss", "solidity",
            "swift", "typescript", "typescriptreact", "v", "zig",
        ],
    ),
    (
        "# ",
        &[
            "awk", "cmake", "coffeescript", "crystal", "dockerfile", "dotenv", "elixir",
            "graphql", "ignore", "julia", "makefile", "nim", "nix", "perl", "powershell",
            "properties", "python", "r", "raku", "ruby", "shellscript", "tcl", "terraform",
            "toml", "yaml",
        ],
    ),
    ("-- ", &["ada", "elm", "haskell", "lua", "purescript", "sql", "vhdl"]),
    (";; ", &["clojure", "lisp", "racket", "scheme"]),
    ("; ", &["asm", "ini"]),
    ("% ", &["bibtex", "erlang", "latex", "matlab", "prolog", "tex"]),
    ("' ", &["vb"]),
    ("REM ", &["bat"]),
    ("! ", &["fortran", "fortran-modern"]),
    ("\" ", &["vim"]),
];

const BLOCK_COMMENTS: &[((&str, &str), &[&str])] = &[
    (
        ("<!-- ", " -->"),
        &["astro", "html", "markdown", "svelte", "svg", "vue", "xml", "xsl"],
    ),
    (("/* ", " */"), &["css", "postcss", "stylus"]),
    (("(* ", " *)"), &["ocaml", "pascal"]),
    (("{{!-- ", " --}}"), &["handlebars"]),
    (("{# ", " #}"), &["django-html", "jinja", "twig"]),
    (("@* ", " *@"), &["razor"]),
];

static LINE_STYLES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    LINE_COMMENTS
        .iter()
        .flat_map(|(prefix, ids)| ids.iter().map(move |id| (*id, *prefix)))
        .collect()
});

static BLOCK_STYLES: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        BLOCK_COMMENTS
            .iter()
            .flat_map(|(delimiters, ids)| ids.iter().map(move |id| (*id, *delimiters)))
            .collect()
    });

impl CommentStyle {
    /// Style used for file types missing from both tables.
    pub const DEFAULT: CommentStyle = CommentStyle::Line { prefix: "// " };

    /// Resolve the comment style for a file-type identifier.
    ///
    /// The line table is consulted before the block table. Matching is
    /// case-insensitive.
    pub fn resolve(file_type: &str) -> Self {
        let key = file_type.trim().to_ascii_lowercase();
        if let Some(&prefix) = LINE_STYLES.get(key.as_str()) {
            return Self::Line { prefix };
        }
        if let Some(&(prefix, suffix)) = BLOCK_STYLES.get(key.as_str()) {
            return Self::Block { prefix, suffix };
        }
        tracing::debug!(file_type, "no comment syntax registered, using default");
        Self::DEFAULT
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Line { prefix } | Self::Block { prefix, .. } => *prefix,
        }
    }

    /// Closing delimiter, empty for line comments.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Line { .. } => "",
            Self::Block { suffix, .. } => *suffix,
        }
    }

    /// Wrap `text` in this comment syntax, without a line terminator.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix(), text, self.suffix())
    }
}
