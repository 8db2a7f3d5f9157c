use crate::catalog::Catalog;
use crate::commands::{CategoryCount, CmdResult};
use crate::criteria::CategoryFilter;

pub fn run(catalog: &Catalog) -> CmdResult {
    let counts = CategoryFilter::options()
        .into_iter()
        .map(|filter| CategoryCount {
            filter,
            count: catalog
                .products()
                .iter()
                .filter(|p| filter.matches(p.category))
                .count(),
        })
        .collect();

    CmdResult::default().with_category_counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn counts_every_option() {
        let result = run(&Catalog::builtin());
        assert_eq!(
            result.category_counts,
            vec![
                CategoryCount {
                    filter: CategoryFilter::All,
                    count: 12
                },
                CategoryCount {
                    filter: CategoryFilter::Only(Category::Electronics),
                    count: 6
                },
                CategoryCount {
                    filter: CategoryFilter::Only(Category::Fashion),
                    count: 6
                },
            ]
        );
    }
}
