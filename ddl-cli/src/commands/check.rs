use ddl_core::check;

/// 打印类型兼容性结论
pub fn run_check(source_type: &str, target_type: &str) {
    let result = check(source_type, target_type);
    match result.warning() {
        Some(warning) => println!("incompatible: {warning}"),
        None => println!("compatible"),
    }
}
