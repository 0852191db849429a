// ABOUTME: 'cvkit codes' command implementation
// ABOUTME: Lists every stable issue code with its translation key

use cvkit_lib::codes::ALL;
use cvkit_lib::i18n::message_key;
use cvkit_lib::Result;

/// Print every code grouped by namespace
pub fn run() -> Result<()> {
    let mut current = "";
    for &(namespace, code) in ALL {
        if namespace != current {
            if !current.is_empty() {
                println!();
            }
            println!("📋 {namespace}");
            current = namespace;
        }
        println!("  {code:<24} {}", message_key(namespace, code));
    }
    Ok(())
}
