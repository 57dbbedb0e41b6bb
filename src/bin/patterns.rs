// Runs every pattern demo in order and prints what each one logs.

use colored::Colorize;
use js_patterns::p1_module_pattern::{HtmlChanger, Page, TARGET_ELEMENT};
use js_patterns::p2_revealing_module::Exposer;
use js_patterns::p3_prototype::Person;
use js_patterns::{init_tracing, printer, Config, PrinterConfig};
use std::error::Error;
use std::path::PathBuf;

fn banner(title: &str) {
    println!("{}", format!("=== {} ===", title).as_str().bold().cyan());
}

fn module_pattern_example() -> Result<(), Box<dyn Error>> {
    let mut page = Page::new().with_element(TARGET_ELEMENT);
    let changer = HtmlChanger::new();

    let contents = changer.call_change_html(&mut page)?;
    println!("{}", contents);
    Ok(())
}

fn revealing_module_example() {
    let mut exposer = Exposer::new();
    println!("{}", exposer.first());
    println!("{}", exposer.second());
    // `exposer.method_to_expose()` does not compile: it is private.
}

fn prototype_example() {
    let person = Person::new();
    println!("{}", person.go());
    println!("{}", person.stop());

    let copy = person.from_prototype("Ada");
    println!("Cloned from prototype: {:?}", copy);
}

fn singleton_example(config: &PrinterConfig) -> Result<(), Box<dyn Error>> {
    let first = printer::instance_with(config)?;
    first.turn_on();
    first.print("hello.txt");

    let second = printer::instance()?;
    println!("Printer model: {}", second.model());
    println!("Same instance: {}", std::ptr::eq(first, second));
    println!("Pages printed: {}", second.pages_printed());
    println!("Constructions: {}", printer::constructions());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::resolve(std::env::args_os().nth(1).map(PathBuf::from))?;
    init_tracing(&config.log.filter);

    println!("{}", "JavaScript Design Patterns in Rust".bold());
    println!("==================================\n");

    banner("Module Pattern");
    module_pattern_example()?;
    println!();

    banner("Revealing Module Pattern");
    revealing_module_example();
    println!();

    banner("Prototype Pattern");
    prototype_example();
    println!();

    banner("Singleton Pattern");
    singleton_example(&config.printer)?;

    Ok(())
}
