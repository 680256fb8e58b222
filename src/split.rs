use rand::seq::SliceRandom;
use rand::Rng;

/// Splits example indices into train/test sets, class by class.
///
/// With `balanced` set, minority classes are cyclically oversampled so that every
/// per-class subset reaches the majority class's train/test sizes. Duplicate
/// indices are expected in that case; no synthetic points are made up.
pub fn split_train_test<L>(
    labels: &[L],
    ratio: f64,
    balanced: bool,
    rng: &mut impl Rng,
) -> (Vec<usize>, Vec<usize>)
where
    L: Copy + PartialEq,
{
    let classes = group_by_class(labels);

    let mut train = Vec::new();
    let mut test = Vec::new();

    if balanced {
        let majority = classes.iter().map(|(_, idx)| idx.len()).max().unwrap_or(0);
        let majority_train = (majority as f64 * ratio).round() as usize;
        let majority_test = majority - majority_train;

        for (_, mut indexes) in classes {
            indexes.shuffle(rng);
            if indexes.len() < majority {
                let limit = (indexes.len() as f64 * ratio).round() as usize;
                let (class_train, class_test) = indexes.split_at(limit);
                train.extend(tile(class_train, majority_train));
                test.extend(tile(class_test, majority_test));
            } else {
                train.extend_from_slice(&indexes[..majority_train]);
                test.extend_from_slice(&indexes[majority_train..]);
            }
        }
    } else {
        for (_, mut indexes) in classes {
            indexes.shuffle(rng);
            let limit = (indexes.len() as f64 * ratio).round() as usize;
            train.extend_from_slice(&indexes[..limit]);
            test.extend_from_slice(&indexes[limit..]);
        }
    }

    (train, test)
}

// cyclic repetition truncated to the target size; an empty side stays empty
fn tile(indexes: &[usize], target: usize) -> Vec<usize> {
    if indexes.is_empty() {
        return Vec::new();
    }
    indexes.iter().copied().cycle().take(target).collect()
}

fn group_by_class<L: Copy + PartialEq>(labels: &[L]) -> Vec<(L, Vec<usize>)> {
    let mut classes: Vec<(L, Vec<usize>)> = Vec::new();
    for (i, &label) in labels.iter().enumerate() {
        match classes.iter_mut().find(|(l, _)| *l == label) {
            Some((_, indexes)) => indexes.push(i),
            None => classes.push((label, vec![i])),
        }
    }
    classes
}
