/// Declare the `main` function of a solver binary.
///
/// The solver is a function taking `&Input` and returning the answers. Its
/// input is read from `inputs/<input>` in the calling crate, unless another
/// path is provided through `--input`. If `expect` is specified, the answers
/// are checked against it.
///
/// ```ignore
/// use lib::prelude::*;
///
/// lib::entry!(solve, input = "d03.txt", expect = (4361, 467835));
///
/// fn solve(input: &Input) -> Result<(u64, u64)> {
///     /* .. */
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (@expect) => {
        None
    };

    (@expect $expect:expr) => {
        Some($expect)
    };

    ($solve:path, input = $input:literal $(, expect = $expect:expr)? $(,)?) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;

            let entry = $crate::cli::Entry {
                path: concat!("inputs/", $input),
                read_path: concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $input),
            };

            $crate::cli::run(&opts, entry, $crate::entry!(@expect $($expect)?), $solve)
        }
    };
}
