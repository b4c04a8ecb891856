//! Parallel load check over every pair.

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use thermal_pairs::{Error, PairedImageDataset};

pub fn run(dataset: &PairedImageDataset, jobs: Option<usize>) -> Result<()> {
    let failures = find_failures(dataset, jobs)?;

    for (index, err) in &failures {
        println!("{}\t{}\t{}", index, dataset.pairs()[*index].basename, err);
    }
    println!("Loaded {} of {} pairs", dataset.len() - failures.len(), dataset.len());

    if !failures.is_empty() {
        bail!("{} pairs failed to load", failures.len());
    }
    Ok(())
}

/// Load every pair on a worker pool; failures come back in index order.
fn find_failures(dataset: &PairedImageDataset, jobs: Option<usize>) -> Result<Vec<(usize, Error)>> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder.build().context("Failed to start worker pool")?;

    log::info!("Checking {} pairs on {} threads", dataset.len(), pool.current_num_threads());

    let mut failures: Vec<(usize, Error)> = pool.install(|| {
        (0..dataset.len())
            .into_par_iter()
            .filter_map(|index| dataset.get(index).err().map(|e| (index, e)))
            .collect()
    });
    failures.sort_by_key(|(index, _)| *index);
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixture;

    #[test]
    fn test_all_pairs_load() {
        let fixture = Fixture::new(&["a", "b", "c"]);
        let dataset = fixture.dataset(4);

        assert!(find_failures(&dataset, Some(2)).unwrap().is_empty());
        assert!(run(&dataset, Some(2)).is_ok());
    }

    #[test]
    fn test_corrupt_pair_reported() {
        let fixture = Fixture::new(&["a", "b", "c"]);
        fixture.corrupt_thermal("b");
        let dataset = fixture.dataset(4);

        let failures = find_failures(&dataset, Some(2)).unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 1);
        assert!(matches!(failures[0].1, Error::ImageDecode { .. }));

        let err = run(&dataset, None).unwrap_err();
        assert_eq!(err.to_string(), "1 pairs failed to load");
    }
}
