use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn positional_and_flags() {
    let options =
        parse_options(&args(&["prog.sl", "--max-depth=64", "--var=x=10", "--var=y=-3"])).unwrap();
    assert_eq!(
        options,
        Options {
            positional: vec!["prog.sl".to_string()],
            max_call_depth: Some(64),
            variables: vec![("x".to_string(), 10), ("y".to_string(), -3)],
        }
    );
}

#[test]
fn no_arguments() {
    assert_eq!(parse_options(&[]).unwrap(), Options::default());
}

#[test]
fn rejects_bad_depth() {
    assert_eq!(
        parse_options(&args(&["--max-depth=0"])),
        Err(OptionsError::InvalidDepth("0".to_string()))
    );
    assert_eq!(
        parse_options(&args(&["--max-depth=lots"])),
        Err(OptionsError::InvalidDepth("lots".to_string()))
    );
}

#[test]
fn rejects_bad_var() {
    for bad in ["--var=x", "--var=x1=2", "--var==2", "--var=x=abc"] {
        assert!(
            matches!(parse_options(&args(&[bad])), Err(OptionsError::InvalidVar(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn rejects_unknown_flag() {
    assert_eq!(
        parse_options(&args(&["--fast"])),
        Err(OptionsError::UnknownFlag("--fast".to_string()))
    );
}
