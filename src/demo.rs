use std::io::{self, Write};

use anyhow::{Context, Result};
use bst::handle;
use bst::{Emptiness, Order, OrderedTree, TreeError};
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(about = "Builds a binary search tree and prints what it knows about itself")]
struct Args {
    /// Keys to insert, in order
    #[arg(
        long,
        env = "BST_DEMO_VALUES",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "50,30,70,20,40,60,80"
    )]
    values: Vec<i32>,

    /// Key to look up once the tree is built
    #[arg(long, env = "BST_DEMO_SEARCH", allow_negative_numbers = true, default_value_t = 40)]
    search: i32,

    /// Traversals to print. Defaults to in-order, pre-order, then post-order
    #[arg(long, value_enum)]
    order: Vec<OrderArg>,

    /// Log verbosity, repeat for more (-d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

/// Command line spelling of [`Order`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Pre,
    In,
    Post,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Pre => Order::PreOrder,
            OrderArg::In => Order::InOrder,
            OrderArg::Post => Order::PostOrder,
        }
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `-d` sets the default level. Directives in `RUST_LOG` are layered on top of it.
fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut tree = handle::create();
    for &value in &args.values {
        match handle::insert(Some(&mut tree), value) {
            Ok(()) => {}
            Err(TreeError::DuplicateKey(value)) => warn!(value, "skipping duplicate key"),
            Err(e) => return Err(e).context("building tree"),
        }
    }
    info!(size = tree.len(), depth = tree.depth(), "built tree");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&tree, args, &mut out).context("writing report")?;

    handle::destroy(Some(tree));
    Ok(())
}

fn report(tree: &OrderedTree, args: &Args, out: &mut impl Write) -> io::Result<()> {
    let orders: Vec<Order> = if args.order.is_empty() {
        Order::ALL.to_vec()
    } else {
        args.order.iter().copied().map(Order::from).collect()
    };

    for (i, &order) in orders.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} traversal:", heading(order))?;
        for key in tree.traverse(order) {
            writeln!(out, "{key}")?;
        }
    }

    match handle::is_empty(Some(tree)) {
        Emptiness::Empty => writeln!(out, "\nThe BST is empty.")?,
        Emptiness::NonEmpty => writeln!(out, "\nThe BST is not empty.")?,
        Emptiness::InvalidContainer => unreachable!("report is always given a tree"),
    }
    writeln!(out, "Size of the BST: {}", handle::size(Some(tree)))?;
    writeln!(out, "Sum of elements in the BST: {}", handle::sum(Some(tree)))?;

    if handle::contains(Some(tree), args.search) {
        writeln!(out, "{} is found in the BST.", args.search)
    } else {
        writeln!(out, "{} is not found in the BST.", args.search)
    }
}

fn heading(order: Order) -> &'static str {
    match order {
        Order::PreOrder => "Pre-order",
        Order::InOrder => "In-order",
        Order::PostOrder => "Post-order",
    }
}
