use indoc::indoc;
use jass2ts_core::Library;

use super::{Config, OptionalStyle, Overrides, emit, emit_with_config};
use crate::parser::recognize;

fn ts(source: &str) -> String {
    emit(&recognize(source).library)
}

fn ts_with(source: &str, config: Config) -> String {
    emit_with_config(&recognize(source).library, config)
}

#[test]
fn empty_library() {
    let output = emit(&Library::new());

    assert_eq!(output, "/** @noSelfInFile **/\n\n\n\n\n\n");
}

#[test]
fn empty_library_without_header() {
    let output = emit_with_config(&Library::new(), Config::new().header(false));

    assert_eq!(output, "\n\n\n\n");
}

#[test]
fn type_declaration() {
    let output = ts("type unit extends handle");

    insta::assert_snapshot!(output, @r"
    /** @noSelfInFile **/

    declare abstract class unit extends handle { private __unit: never }
    ");
}

#[test]
fn native_declaration() {
    let output = ts("native GetUnitX takes unit whichUnit returns real");

    insta::assert_snapshot!(output, @r"
    /** @noSelfInFile **/


    declare function GetUnitX(whichUnit: unit): number
    ");
}

#[test]
fn native_without_arguments() {
    let output = ts("native GetTriggerUnit takes nothing returns unit");

    insta::assert_snapshot!(output, @r"
    /** @noSelfInFile **/


    declare function GetTriggerUnit(): unit
    ");
}

#[test]
fn condition_override() {
    let output = ts("native Condition takes code func returns conditionfunc");

    insta::assert_snapshot!(output, @r"
    /** @noSelfInFile **/


    declare function Condition(func: () => boolean): conditionfunc
    ");
}

#[test]
fn filter_override() {
    let output = ts("native Filter takes code func returns filterfunc");

    assert!(output.contains("declare function Filter(func: () => boolean): filterfunc\n"));
}

#[test]
fn code_argument_without_override() {
    let output = ts("native TimerStart takes timer whichTimer, real timeout, boolean periodic, code handlerFunc returns nothing");

    assert!(output.contains(
        "declare function TimerStart(whichTimer: timer, timeout: number, periodic: boolean, handlerFunc: () => void): void\n"
    ));
}

#[test]
fn boolexpr_argument_is_optional() {
    let output = ts("native GroupEnumUnitsOfPlayer takes group whichGroup, player whichPlayer, boolexpr filter returns nothing");

    assert!(output.contains(
        "declare function GroupEnumUnitsOfPlayer(whichGroup: group, whichPlayer: player, filter: boolexpr | null): void\n"
    ));
}

#[test]
fn boolexpr_undefined_style() {
    let config = Config::new().optional_style(OptionalStyle::Undefined);
    let output = ts_with(
        "native And takes boolexpr operandA, boolexpr operandB returns boolexpr",
        config,
    );

    assert!(output.contains(
        "declare function And(operandA: boolexpr | undefined, operandB: boolexpr | undefined): boolexpr\n"
    ));
}

#[test]
fn overrides_apply_to_natives_only() {
    let output = ts("function Condition takes code func returns conditionfunc");

    assert!(output.contains("declare function Condition(func: () => void): conditionfunc\n"));
}

#[test]
fn custom_overrides_replace_builtin() {
    let overrides = Overrides::new().with("ForGroup", 1, "(this: void) => void");
    let config = Config::new().overrides(overrides);
    let source = indoc! {"
        native ForGroup takes group whichGroup, code callback returns nothing
        native Condition takes code func returns conditionfunc
    "};

    let output = ts_with(source, config);

    assert!(output.contains(
        "declare function ForGroup(whichGroup: group, callback: (this: void) => void): void\n"
    ));
    assert!(output.contains("declare function Condition(func: () => void): conditionfunc\n"));
}

#[test]
fn globals() {
    let source = indoc! {"
        globals
            constant integer MAX_PLAYERS = 28
            real gameTime = 0.0
            unit array heroes
            code array callbacks
            boolexpr cond
        endglobals
    "};

    let output = ts(source);

    insta::assert_snapshot!(output, @r"
    /** @noSelfInFile **/



    declare const MAX_PLAYERS: number
    declare var gameTime: number
    declare var heroes: unit[]
    declare var callbacks: (() => void)[]
    declare var cond: boolexpr
    ");
}

#[test]
fn missing_return_type_is_void() {
    let output = ts("native Broken takes integer i");

    assert!(output.contains("declare function Broken(i: number): void\n"));
}

#[test]
fn degenerate_argument_keeps_empty_name() {
    let output = ts("native Odd takes integer returns nothing");

    assert!(output.contains("declare function Odd(: number): void\n"));
}

#[test]
fn empty_takes_clause_renders_unnamed_void_argument() {
    let output = ts("native F takes returns integer");

    assert!(output.contains("declare function F(: void): number\n"));
}

#[test]
fn full_file_groups_in_fixed_order() {
    let source = indoc! {"
        function Helper takes nothing returns nothing
        endfunction
        globals
            integer counter = 0
        endglobals
        native GetUnitX takes unit whichUnit returns real
        type unit extends handle
        type timer extends handle
        constant native GetTriggerUnit takes nothing returns unit
    "};

    let output = ts(source);

    insta::assert_snapshot!(output, @r"
    /** @noSelfInFile **/

    declare abstract class unit extends handle { private __unit: never }
    declare abstract class timer extends handle { private __timer: never }

    declare function GetUnitX(whichUnit: unit): number
    declare function GetTriggerUnit(): unit

    declare var counter: number

    declare function Helper(): void
    ");
}

#[test]
fn output_ends_with_blank_line() {
    let output = ts("function Helper takes nothing returns nothing");

    assert!(output.ends_with("declare function Helper(): void\n\n"));
}

#[test]
fn colored_output_wraps_names() {
    let output = ts_with("type unit extends handle", Config::new().colored(true));

    assert!(output.contains("\x1b[34munit\x1b[0m"));
    assert!(output.contains("\x1b[32mhandle\x1b[0m"));
}

#[test]
fn emission_is_deterministic() {
    let source = indoc! {"
        type unit extends handle
        native GetUnitX takes unit whichUnit returns real
    "};
    let library = recognize(source).library;

    assert_eq!(emit(&library), emit(&library));
}

#[test]
fn condition_override_beats_boolexpr_mapping() {
    let output = ts("native Condition takes boolexpr c returns nothing");

    assert!(output.contains("declare function Condition(c: () => boolean): void\n"));
    assert!(!output.contains("boolexpr | null"));
}

#[test]
fn constant_and_array_globals() {
    let source = indoc! {"
        globals
        constant real PI = 3.14
        integer array Scores
        endglobals
    "};

    let output = ts(source);

    assert!(output.contains("declare const PI: number\n"));
    assert!(output.contains("declare var Scores: number[]\n"));
    assert!(!output.contains("3.14"));
}
