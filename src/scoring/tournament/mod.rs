pub use sum_best::SumBestRounds;

mod sum_best;
