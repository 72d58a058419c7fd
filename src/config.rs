use std::iter::Peekable;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// 帮助 `-h`
    Help,
    /// 版本 `-V`
    Version,
    /// 打印调试日志 `-v`
    Verbose,
}

pub(crate) fn parse_configs(args: &mut Peekable<impl Iterator<Item = String>>) -> Vec<Config> {
    let mut configs = Vec::new();
    while let Some(config) = parse_config(args.peek()) {
        args.next();
        configs.push(config);
    }
    configs
}

fn parse_config(arg: Option<&String>) -> Option<Config> {
    match arg {
        Some(arg) => match arg.as_str() {
            "-h" | "--help" => Some(Config::Help),
            "-V" | "--version" => Some(Config::Version),
            "-v" | "--verbose" => Some(Config::Verbose),
            _ => None, // 遇到未知参数，停止解析（由调用者处理）
        },
        None => None,
    }
}
