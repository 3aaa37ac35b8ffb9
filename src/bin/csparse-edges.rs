extern crate getopts;
extern crate csparse;

use std::process;

use getopts::Options;

use csparse::filenames::FileNames;

fn print_usage(opts: &Options) {
    print!("{}", opts.usage("usage:\tcsparse-edges [options] <suffix> [prefix]"));
}

fn main () {

    let mut opts = Options::new();
    opts.optopt("d", "dir", "directory holding the input and output files", "DIR");
    opts.optflag("s", "strict", "fail if the input edge file cannot be opened");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(std::env::args().skip(1)) {
        Ok(matches) => matches,
        Err(err) => {
            println!("error parsing arguments: {}", err);
            print_usage(&opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print_usage(&opts);
        return;
    }

    if matches.free.is_empty() {
        println!("Not enough arguments. Need at least one argument.");
        println!("Specify block height as first argument and an optional filename prefix as the second argument.");
        println!("For example: csparse-edges 1541236 ringct");
        process::exit(1);
    }

    let suffix = &matches.free[0];
    let prefix = matches.free.get(1).map(|x| &x[..]);
    let mut files = FileNames::new(suffix, prefix);
    if let Some(dir) = matches.opt_str("d") {
        files = files.within(dir);
    }

    if let Err(err) = csparse::run(&files, matches.opt_present("s")) {
        println!("error: {}", err);
        process::exit(1);
    }
}
