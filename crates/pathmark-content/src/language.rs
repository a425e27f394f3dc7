//! File-type detection from file names
//!
//! Stands in for the editor's language mode: a path maps to the same
//! identifiers the comment syntax table is keyed by.

/// File type used when nothing matches.
pub const PLAINTEXT: &str = "plaintext";

/// Detect the file-type identifier for a path from its file name.
pub fn file_type_for_path(path: &str) -> &'static str {
    let name = path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(path);

    if let Some(file_type) = by_file_name(name) {
        return file_type;
    }

    match name.rfind('.') {
        Some(idx) => by_extension(&name[idx + 1..].to_ascii_lowercase()).unwrap_or(PLAINTEXT),
        None => PLAINTEXT,
    }
}

fn by_file_name(name: &str) -> Option<&'static str> {
    let file_type = match name {
        "Dockerfile" | "Containerfile" => "dockerfile",
        "Makefile" | "makefile" | "GNUmakefile" => "makefile",
        "CMakeLists.txt" => "cmake",
        "Jenkinsfile" => "groovy",
        "Gemfile" | "Rakefile" | "Podfile" | "Vagrantfile" => "ruby",
        ".gitignore" | ".dockerignore" | ".npmignore" => "ignore",
        ".env" => "dotenv",
        ".bashrc" | ".zshrc" | ".profile" | ".bash_profile" => "shellscript",
        _ if name.starts_with("Dockerfile.") => "dockerfile",
        _ if name.starts_with(".env.") => "dotenv",
        _ => return None,
    };
    Some(file_type)
}

fn by_extension(ext: &str) -> Option<&'static str> {
    let file_type = match ext {
        "js" | "mjs" | "cjs" => "javascript",
        "jsx" => "javascriptreact",
        "ts" | "mts" | "cts" => "typescript",
        "tsx" => "typescriptreact",
        "c" | "h" => "c",
        "cc" | "cpp" | "cxx" | "hh" | "hpp" | "hxx" => "cpp",
        "cu" | "cuh" => "cuda-cpp",
        "cs" => "csharp",
        "java" => "java",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" | "sc" => "scala",
        "dart" => "dart",
        "php" => "php",
        "scss" => "scss",
        "less" => "less",
        "jsonc" => "jsonc",
        "json" => "json",
        "groovy" | "gradle" => "groovy",
        "m" => "objective-c",
        "mm" => "objective-cpp",
        "fs" | "fsi" | "fsx" => "fsharp",
        "zig" => "zig",
        "sol" => "solidity",
        "proto" => "proto3",
        "glsl" | "vert" | "frag" => "glsl",
        "hlsl" => "hlsl",
        "d" => "d",
        "gleam" => "gleam",
        "v" => "v",
        "py" | "pyi" | "pyw" => "python",
        "rb" => "ruby",
        "pl" | "pm" => "perl",
        "raku" | "rakumod" => "raku",
        "sh" | "bash" | "zsh" | "ksh" => "shellscript",
        "ps1" | "psm1" => "powershell",
        "r" => "r",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "mk" => "makefile",
        "cmake" => "cmake",
        "coffee" => "coffeescript",
        "ex" | "exs" => "elixir",
        "jl" => "julia",
        "nim" => "nim",
        "cr" => "crystal",
        "properties" => "properties",
        "graphql" | "gql" => "graphql",
        "tf" | "tfvars" => "terraform",
        "nix" => "nix",
        "tcl" => "tcl",
        "awk" => "awk",
        "sql" => "sql",
        "lua" => "lua",
        "hs" => "haskell",
        "elm" => "elm",
        "purs" => "purescript",
        "adb" | "ads" => "ada",
        "vhd" | "vhdl" => "vhdl",
        "clj" | "cljs" | "cljc" | "edn" => "clojure",
        "lisp" | "el" => "lisp",
        "scm" | "ss" => "scheme",
        "rkt" => "racket",
        "asm" | "s" => "asm",
        "ini" | "cfg" => "ini",
        "tex" => "latex",
        "bib" => "bibtex",
        "erl" | "hrl" => "erlang",
        "vb" => "vb",
        "bat" | "cmd" => "bat",
        "f" | "for" => "fortran",
        "f90" | "f95" | "f03" => "fortran-modern",
        "vim" => "vim",
        "html" | "htm" => "html",
        "xml" | "xsd" | "plist" => "xml",
        "xsl" | "xslt" => "xsl",
        "svg" => "svg",
        "md" | "markdown" => "markdown",
        "vue" => "vue",
        "svelte" => "svelte",
        "astro" => "astro",
        "css" => "css",
        "pcss" | "postcss" => "postcss",
        "styl" => "stylus",
        "ml" | "mli" => "ocaml",
        "pas" | "pp" => "pascal",
        "hbs" | "handlebars" => "handlebars",
        "j2" | "jinja" | "jinja2" => "jinja",
        "twig" => "twig",
        "cshtml" | "razor" => "razor",
        "txt" | "text" => PLAINTEXT,
        _ => return None,
    };
    Some(file_type)
}
