mod config;
mod logging;

use std::path::PathBuf;
use std::process::exit;

use anyhow::{bail, Context, Error};
use clap::{Parser, Subcommand};
use payment_contracts::{AttachData, EnumItem, PaymentChannel, PaymentType};
use serde_json::{json, Value};
use tracing::{debug, error, info};

use crate::config::{LogConfig, PayctlConfig};

#[derive(Parser, Debug)]
#[command(name = "payctl")]
#[command(about = "支付附加数据与支付类型工具", long_about = None)]
struct Cli {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 生成结构化 attach 字符串
    Encode {
        /// 订单 ID
        #[arg(long)]
        order_id: u64,

        /// 订单号
        #[arg(long)]
        order_sn: String,

        /// 业务类型
        #[arg(long = "type", default_value = "order")]
        kind: String,

        /// 扩展数据（JSON 对象）
        #[arg(long)]
        extra: Option<String>,
    },

    /// 严格解码结构化 attach
    Decode {
        text: String,
    },

    /// 宽松解析 attach，支持旧格式 `order_id_<数字>`
    Parse {
        text: String,
    },

    /// 列出启用的支付类型
    Types {
        /// 按支付渠道过滤
        #[arg(long)]
        channel: Option<PaymentChannel>,

        /// 以 JSON 输出
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// **支付附加数据工具**
///
/// ***usage：***
/// ```shell
/// payctl encode --order-id 123 --order-sn ORD001 --extra '{"coupon_id":7}'
/// payctl decode '{"order_id":123,"order_sn":"ORD001","type":"order"}'
/// payctl parse order_id_123
/// payctl types --channel wechat --json
///
/// # 使用环境变量
/// export PAYCTL_CONFIG=/etc/payctl.toml
/// PAYCTL_PAYMENT__LEGACY_ATTACH=false payctl parse order_id_123
/// ```
fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match PayctlConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // 日志尚未按配置初始化，先用默认配置输出错误
            match logging::init(&LogConfig::default()) {
                Ok(()) => error!("配置加载失败: {}", e),
                Err(init_err) => eprintln!("{}\n配置加载失败: {}", init_err, e),
            }
            exit(1);
        }
    };

    if let Err(e) = logging::init(&config.log) {
        eprintln!("{}", e);
        exit(1);
    }

    let result = match cli.command {
        Commands::Encode { order_id, order_sn, kind, extra } => {
            handle_encode(order_id, order_sn, kind, extra.as_deref())
        }
        Commands::Decode { text } => handle_decode(&text),
        Commands::Parse { text } => handle_parse(&text, &config),
        Commands::Types { channel, json } => handle_types(channel, json, &config),
    };

    if let Err(e) = result {
        error!("操作失败: {:#}", e);
        exit(1);
    }
}

fn handle_encode(
    order_id: u64,
    order_sn: String,
    kind: String,
    extra: Option<&str>,
) -> Result<(), Error> {
    let mut attach = AttachData::new(order_id, order_sn).with_type(kind);

    if let Some(extra) = extra {
        let value: Value = serde_json::from_str(extra).context("--extra 不是合法的 JSON")?;
        let Value::Object(extra) = value else {
            bail!("--extra 必须是 JSON 对象");
        };
        attach = attach.with_extra(extra);
    }

    let encoded = attach.encode().context("attach 编码失败")?;
    debug!(order_id, "attach 编码完成");
    println!("{}", encoded);
    Ok(())
}

fn handle_decode(text: &str) -> Result<(), Error> {
    let attach = AttachData::decode(text)?;
    print_attach(&attach);
    Ok(())
}

fn handle_parse(text: &str, config: &PayctlConfig) -> Result<(), Error> {
    let parsed = if config.payment.legacy_attach {
        AttachData::parse(text)
    } else {
        AttachData::decode(text).ok()
    };

    match parsed {
        Some(attach) => {
            if attach.is_legacy() {
                info!(order_id = attach.order_id(), "旧格式 attach，订单号需另行查询");
            }
            print_attach(&attach);
            Ok(())
        }
        None => {
            println!("no attach data");
            exit(1);
        }
    }
}

fn handle_types(
    channel: Option<PaymentChannel>,
    as_json: bool,
    config: &PayctlConfig,
) -> Result<(), Error> {
    let types: Vec<PaymentType> = config
        .payment
        .enabled()?
        .into_iter()
        .filter(|payment_type| channel.is_none_or(|channel| payment_type.channel() == channel))
        .collect();

    if as_json {
        let items: Vec<Value> = types
            .iter()
            .map(|payment_type| {
                json!({
                    "value": payment_type.item_value(),
                    "label": payment_type.item_label(),
                    "channel": payment_type.channel().as_str(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for payment_type in &types {
            println!(
                "{}\t{}\t{}",
                payment_type.value(),
                payment_type.label(),
                payment_type.channel().as_str()
            );
        }
    }

    Ok(())
}

fn print_attach(attach: &AttachData) {
    println!("order_id: {}", attach.order_id());
    println!("order_sn: {}", attach.order_sn());
    println!("type: {}", attach.kind());
    if !attach.extra().is_empty() {
        println!("extra: {}", Value::Object(attach.extra().clone()));
    }
}
