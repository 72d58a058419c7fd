use lazyseq::{Integer, LazySeq};
use ordered_float::OrderedFloat;
use std::process::{ExitCode, Termination};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, Eq, PartialEq)]
pub(crate) enum DemoErr {
    #[error("[Bad Arg] Unknown demo `{0}`, run with `-h` to list all demos")]
    UnknownDemo(String),
}

impl Termination for DemoErr {
    fn report(self) -> ExitCode {
        eprintln!("{}", self);
        ExitCode::from(self.exit_code())
    }
}

impl DemoErr {
    fn exit_code(&self) -> u8 {
        match self {
            DemoErr::UnknownDemo(_) => 1,
        }
    }
}

/// 演示用例，每个用例组合一条流水线并通过日志输出结果。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Demo {
    /// 惰性求值：只有在收集时才会计算。
    Lazy,
    /// 链式组合多个操作。
    Compose,
    /// 分页。
    Paginate,
    /// 分块。
    Chunk,
    /// 短路求值：只处理需要的元素。
    FirstPositive,
    /// 计数。
    Count,
    /// 归约。
    Reduce,
    /// 分组。
    Group,
    /// 去重。
    Distinct,
    /// 按键排序。
    Sort,
    /// 配对与编号。
    Zip,
}

impl Demo {
    pub(crate) const ALL: [Demo; 11] = [
        Demo::Lazy,
        Demo::Compose,
        Demo::Paginate,
        Demo::Chunk,
        Demo::FirstPositive,
        Demo::Count,
        Demo::Reduce,
        Demo::Group,
        Demo::Distinct,
        Demo::Sort,
        Demo::Zip,
    ];

    pub(crate) fn parse(name: &str) -> Result<Demo, DemoErr> {
        Demo::ALL.into_iter().find(|demo| demo.name() == name).ok_or_else(|| DemoErr::UnknownDemo(name.to_owned()))
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Demo::Lazy => "lazy",
            Demo::Compose => "compose",
            Demo::Paginate => "paginate",
            Demo::Chunk => "chunk",
            Demo::FirstPositive => "first-positive",
            Demo::Count => "count",
            Demo::Reduce => "reduce",
            Demo::Group => "group",
            Demo::Distinct => "distinct",
            Demo::Sort => "sort",
            Demo::Zip => "zip",
        }
    }

    pub(crate) fn help(&self) -> &'static str {
        match self {
            Demo::Lazy => "range(1000000).filter(even).map(x * 2).take(10).collect()",
            Demo::Compose => "capitalize names and keep those longer than 3 characters",
            Demo::Paginate => "range(100).paginate(3, 10).collect()",
            Demo::Chunk => "range(10).chunk(3).collect()",
            Demo::FirstPositive => "range(-1000000, 1000000).filter(x > 0).first()",
            Demo::Count => "range(100).filter(x % 3 == 0).count()",
            Demo::Reduce => "range(5).reduce(acc + x * x, 0)",
            Demo::Group => "group fruit names by length",
            Demo::Distinct => "distinct words of a sentence",
            Demo::Sort => "sort fruits by price, most expensive first",
            Demo::Zip => "zip fruits with prices and number them",
        }
    }

    /// 执行流水线并返回结果的文本表示。
    pub(crate) fn eval(&self) -> String {
        match self {
            Demo::Lazy => {
                let result = LazySeq::range_to(1_000_000).filter(|x| x % 2 == 0).map(|x| x * 2).take(10).collect();
                format!("{result:?}")
            }
            Demo::Compose => {
                let names = LazySeq::wrap(["alice", "bob", "charlie", "david"])
                    .map(capitalize)
                    .filter(|name| name.len() > 3)
                    .collect();
                format!("{names:?}")
            }
            Demo::Paginate => format!("{:?}", LazySeq::range_to(100).paginate(3, 10).collect()),
            Demo::Chunk => format!("{:?}", LazySeq::range_to(10).chunk(3).collect()),
            Demo::FirstPositive => {
                let first = LazySeq::range(-1_000_000, 1_000_000).filter(|x| *x > 0).first();
                format!("{first:?}")
            }
            Demo::Count => LazySeq::range_to(100).filter(|x| x % 3 == 0).count().to_string(),
            Demo::Reduce => LazySeq::range_to(5).reduce(|acc: Integer, x| acc + x * x, 0).to_string(),
            Demo::Group => {
                let grouped = LazySeq::wrap(["apple", "banana", "cherry", "date"]).group_by(|s| s.len());
                format!("{grouped:?}")
            }
            Demo::Distinct => {
                let words = LazySeq::wrap("the quick fox saw the lazy fox".split(' ')).distinct().collect();
                format!("{words:?}")
            }
            Demo::Sort => {
                let sorted = LazySeq::wrap(FRUIT_PRICES)
                    .sorted_by_key(|(_, price)| OrderedFloat(*price), true)
                    .map(|(fruit, _)| fruit)
                    .collect();
                format!("{sorted:?}")
            }
            Demo::Zip => {
                let labeled = LazySeq::wrap(FRUIT_PRICES.map(|(fruit, _)| fruit))
                    .zip(FRUIT_PRICES.map(|(_, price)| price))
                    .enumerate()
                    .map(|(i, (fruit, price))| format!("{}. {fruit} {price:.2}", i + 1))
                    .collect();
                format!("{labeled:?}")
            }
        }
    }

    pub(crate) fn run(&self) {
        info!(demo = self.name(), "{}", self.eval());
    }
}

const FRUIT_PRICES: [(&str, f64); 4] = [("apple", 1.2), ("banana", 0.5), ("cherry", 3.75), ("date", 2.0)];

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
