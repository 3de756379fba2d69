use chrono::NaiveDate;
use crate::core::library::{LoanStatus, PaginatedResult};
use crate::loans::domain::classifier;
use crate::loans::domain::model::LoanEntity;

// LoanQuery carries the filter parameters as one explicit value object; all
// set predicates must match. The status predicate compares against the
// effective status, never the persisted one, so filtering and display can
// never disagree. Changing any filter or the page size resets the page to 1;
// that reset is the caller's contract, not enforced here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanQuery {
    // case-insensitive substring against borrower name or item title
    pub text: Option<String>,
    pub status: Option<LoanStatus>,
    // inclusive due-date bounds, either side may be open
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
}

impl LoanQuery {
    pub fn matches(&self, loan: &LoanEntity, today: NaiveDate) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = loan.user_name.to_lowercase().contains(needle.as_str())
                || loan.book_title.to_lowercase().contains(needle.as_str());
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status {
            if classifier::effective_status(loan, today) != status {
                return false;
            }
        }
        if let Some(from) = self.due_from {
            if loan.due_date < from {
                return false;
            }
        }
        if let Some(to) = self.due_to {
            if loan.due_date > to {
                return false;
            }
        }
        true
    }
}

pub fn filter(loans: &[LoanEntity], query: &LoanQuery, today: NaiveDate) -> Vec<LoanEntity> {
    loans.iter().filter(|l| query.matches(l, today)).cloned().collect()
}

// 1-indexed pages, slice clipped to bounds; a page past the end is empty but
// still reports the real totals.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> PaginatedResult<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start = (page - 1) * page_size;
    let slice = if start >= records.len() {
        Vec::new()
    } else {
        records[start..records.len().min(start + page_size)].to_vec()
    };
    PaginatedResult::new(page, page_size, records.len(), slice)
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use crate::borrowers::dto::BorrowerDto;
    use crate::core::library::LoanStatus;
    use crate::inventory::dto::ItemDto;
    use crate::loans::domain::model::LoanEntity;
    use crate::loans::domain::query::{filter, paginate, LoanQuery};
    use crate::utils::date::parse_date;

    fn loan(user_name: &str, book_title: &str, due_date: &str, status: LoanStatus) -> LoanEntity {
        let borrower = BorrowerDto::new(user_name, None);
        let item = ItemDto::new(book_title, 1);
        let mut loan = LoanEntity::new(&borrower, &item,
                                       parse_date("2023-12-01").unwrap(),
                                       parse_date(due_date).unwrap());
        loan.status = status;
        loan
    }

    lazy_static! {
        static ref FIXTURE: Vec<LoanEntity> = vec![
            loan("Maria Silva", "Dom Casmurro", "2023-12-20", LoanStatus::Active),
            loan("João Souza", "Memórias Póstumas", "2024-01-10", LoanStatus::Active),
            loan("Ana Costa", "Dom Casmurro", "2023-12-15", LoanStatus::Returned),
            loan("Carlos Lima", "Vidas Secas", "2024-02-01", LoanStatus::Active),
        ];
    }

    #[tokio::test]
    async fn test_should_match_text_against_name_or_title() {
        let today = parse_date("2024-01-01").unwrap();
        let query = LoanQuery { text: Some("dom".to_string()), ..Default::default() };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(2, res.len());

        let query = LoanQuery { text: Some("SOUZA".to_string()), ..Default::default() };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(1, res.len());
        assert_eq!("João Souza", res[0].user_name.as_str());
    }

    #[tokio::test]
    async fn test_should_filter_on_effective_status() {
        let today = parse_date("2024-01-01").unwrap();
        // the first loan is persisted Active but past due; an Overdue filter
        // finds it and an Active filter does not
        let query = LoanQuery { status: Some(LoanStatus::Overdue), ..Default::default() };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(1, res.len());
        assert_eq!("Maria Silva", res[0].user_name.as_str());

        let query = LoanQuery { status: Some(LoanStatus::Active), ..Default::default() };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(2, res.len());
    }

    #[tokio::test]
    async fn test_should_bound_due_dates_inclusively() {
        let today = parse_date("2024-01-01").unwrap();
        let query = LoanQuery {
            due_from: Some(parse_date("2023-12-15").unwrap()),
            due_to: Some(parse_date("2024-01-10").unwrap()),
            ..Default::default()
        };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(3, res.len());

        let query = LoanQuery {
            due_from: Some(parse_date("2024-01-11").unwrap()),
            ..Default::default()
        };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(1, res.len());
    }

    #[tokio::test]
    async fn test_should_and_all_predicates() {
        let today = parse_date("2024-01-01").unwrap();
        let query = LoanQuery {
            text: Some("dom".to_string()),
            status: Some(LoanStatus::Returned),
            ..Default::default()
        };
        let res = filter(&FIXTURE, &query, today);
        assert_eq!(1, res.len());
        assert_eq!("Ana Costa", res[0].user_name.as_str());
    }

    #[tokio::test]
    async fn test_should_paginate_with_clipping() {
        let records: Vec<i64> = (0..23).collect();
        let page1 = paginate(&records, 1, 10);
        assert_eq!(10, page1.records.len());
        assert_eq!(3, page1.total_pages);
        assert_eq!(23, page1.total_records);

        let page3 = paginate(&records, 3, 10);
        assert_eq!(3, page3.records.len());
        assert_eq!(vec![20, 21, 22], page3.records);

        let past_end = paginate(&records, 9, 10);
        assert_eq!(0, past_end.records.len());
        assert_eq!(3, past_end.total_pages);
    }

    #[tokio::test]
    async fn test_should_keep_one_page_when_empty() {
        let records: Vec<i64> = vec![];
        let page = paginate(&records, 1, 10);
        assert_eq!(1, page.total_pages);
        assert_eq!(0, page.records.len());
    }
}
