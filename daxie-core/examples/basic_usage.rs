//! Basic usage of daxie-core
//!
//! Resolves amounts from sample sentences and writes sample decimals back out
//! as uppercase numerals.

use daxie_core::{amount_to_chinese, get_amount, Decimal};
use std::str::FromStr;

fn main() {
    let texts = [
        "10000",
        "10000元",
        "1万",
        "1万元",
        "我有1元",
        "我有元",
        "我有1万元哈哈",
        "已履行行政处罚决定,罚款10000元哈哈",
        "定给予当事人处以罚款人民币陆拾贰万贰仟玖佰壹拾玖元肆角的行政处罚",
        "壹万伍仟肆佰壹拾圆叁角伍分肆厘",
        "捌万陆仟肆佰壹拾圆整",
        "拾壹亿壹仟万伍仟肆佰壹拾元贰角捌分肆厘",
    ];

    println!("Text to amount:");
    for text in texts {
        println!("  {} = {}", text, get_amount(text).normalize());
    }

    let amounts = ["10000", "100000000001.1", "10001.1034", "10000.2345", "10000.200", "86410", "0.00", "-250.5"];

    println!("\nAmount to uppercase:");
    for amount in amounts {
        let value = Decimal::from_str(amount).expect("sample amounts are valid decimals");
        match amount_to_chinese(value) {
            Ok(text) => println!("  {} = {}", amount, text),
            Err(e) => println!("  {} = error: {}", amount, e),
        }
    }
}
