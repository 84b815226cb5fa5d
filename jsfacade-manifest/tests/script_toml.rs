//! Integration tests loading script.toml files from disk.

use std::{fs, sync::Arc};

use jsfacade_manifest::{Error, ScriptToml};
use jsfacade_script::NameGenerator;
use tempfile::TempDir;

const FULL_MANIFEST: &str = r##"
[script]
function = "save"
args = ["sender", "id"]
confirm = "Are you sure?"
timeout = 250

[[lines]]
call = "alert"
args = ["hi", 1, { "$code" = "sender" }]

[[lines]]
code = "var x = 1;"

[[lines]]
chain = "#id"
calls = [{ name = "attr", args = ["value", "x"] }, { name = "focus" }]

[[triggers]]
selector = "#btn"
event = "keypress"
key = 13
"##;

fn write_manifest(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("script.toml");
    fs::write(&path, content).expect("Failed to write script.toml");
    path
}

#[test]
fn test_render_full_manifest() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_manifest(&dir, FULL_MANIFEST);

    let file = ScriptToml::open(&path).expect("Failed to open manifest");
    assert_eq!(file.path(), path);
    assert_eq!(file.content(), FULL_MANIFEST);

    let script = file
        .manifest()
        .to_script_with(Arc::new(NameGenerator::sequential(0)));

    insta::assert_snapshot!(script.render(true), @r##"
    <script>

    function save(sender,id) {
    setTimeout(function(){if (confirm("Are you sure?")) {
    alert("hi",1,sender);
    var x = 1;
    $("#id").attr("value","x").focus()
    }
    }, 250);
    }
    $(document).ready(function() {
    $("#btn").bind("keypress", function(e) { if (e.which == 13) { save(); } } );})
    </script>
    "##);
}

#[test]
fn test_triggers_name_the_function() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_manifest(
        &dir,
        r##"
[[lines]]
code = "go();"

[[triggers]]
selector = "#a"
event = "click"
"##,
    );

    let file = ScriptToml::open(&path).unwrap();
    let script = file
        .manifest()
        .to_script_with(Arc::new(NameGenerator::sequential(0)));

    assert_eq!(
        script.render(false),
        "\nfunction ajs2(sender) {\ngo();\n}\n$(document).ready(function() {\n$(\"#a\").bind(\"click\", function(e) { ajs2(); } );})"
    );
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ScriptToml::open(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_error_reports_filename() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_manifest(&dir, "[script]\nfunction = \"new\"\n");

    let err = ScriptToml::open(&path).unwrap_err();
    match *err {
        Error::ReservedWord { src, name, .. } => {
            assert_eq!(name, "new");
            assert_eq!(src.name(), path.display().to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}
