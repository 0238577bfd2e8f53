//! Aggregate counters over service requests.
//!
//! Each count is an independent scan, recomputed on every call.

use std::borrow::Borrow;

use crate::models::{Priority, PriorityCounters, ServiceRequest, ServiceRequestStatus, StatusCounters};

/// Number of requests with `status`.
pub fn count_with_status<R: Borrow<ServiceRequest>>(
    requests: &[R],
    status: ServiceRequestStatus,
) -> usize {
    requests
        .iter()
        .filter(|r| Borrow::<ServiceRequest>::borrow(*r).status == status)
        .count()
}

/// Number of requests with `priority`.
pub fn count_with_priority<R: Borrow<ServiceRequest>>(requests: &[R], priority: Priority) -> usize {
    requests
        .iter()
        .filter(|r| Borrow::<ServiceRequest>::borrow(*r).priority == priority)
        .count()
}

pub fn count_by_status<R: Borrow<ServiceRequest>>(requests: &[R]) -> StatusCounters {
    StatusCounters {
        total: requests.len(),
        pending: count_with_status(requests, ServiceRequestStatus::Pending),
        assigned: count_with_status(requests, ServiceRequestStatus::Assigned),
        in_progress: count_with_status(requests, ServiceRequestStatus::InProgress),
        completed: count_with_status(requests, ServiceRequestStatus::Completed),
        cancelled: count_with_status(requests, ServiceRequestStatus::Cancelled),
    }
}

pub fn count_by_priority<R: Borrow<ServiceRequest>>(requests: &[R]) -> PriorityCounters {
    PriorityCounters {
        low: count_with_priority(requests, Priority::Low),
        medium: count_with_priority(requests, Priority::Medium),
        high: count_with_priority(requests, Priority::High),
        emergency: count_with_priority(requests, Priority::Emergency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn request(status: ServiceRequestStatus, priority: Priority) -> ServiceRequest {
        let mut req = ServiceRequest::submit(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Test".to_string(),
            String::new(),
            priority,
            Utc::now(),
        );
        req.status = status;
        req
    }

    #[test]
    fn test_counts_match_filtered_subsets() {
        let requests = vec![
            request(ServiceRequestStatus::Pending, Priority::Low),
            request(ServiceRequestStatus::Pending, Priority::High),
            request(ServiceRequestStatus::Assigned, Priority::High),
            request(ServiceRequestStatus::Completed, Priority::Emergency),
        ];

        let counters = count_by_status(&requests);
        assert_eq!(
            counters,
            StatusCounters {
                total: 4,
                pending: 2,
                assigned: 1,
                in_progress: 0,
                completed: 1,
                cancelled: 0,
            }
        );

        for status in ServiceRequestStatus::ALL {
            let expected = requests.iter().filter(|r| r.status == status).count();
            assert_eq!(counters.get(status), expected);
        }
    }

    #[test]
    fn test_priority_counts() {
        let requests = vec![
            request(ServiceRequestStatus::Pending, Priority::Low),
            request(ServiceRequestStatus::Pending, Priority::High),
            request(ServiceRequestStatus::Assigned, Priority::High),
        ];
        assert_eq!(
            count_by_priority(&requests),
            PriorityCounters {
                low: 1,
                medium: 0,
                high: 2,
                emergency: 0,
            }
        );
    }

    #[test]
    fn test_counts_over_references() {
        let owned = [request(ServiceRequestStatus::InProgress, Priority::Medium)];
        let refs: Vec<&ServiceRequest> = owned.iter().collect();
        assert_eq!(count_by_status(&refs).in_progress, 1);
        assert_eq!(count_with_status(&refs, ServiceRequestStatus::Pending), 0);
        assert_eq!(count_by_priority(&refs).medium, 1);
        assert_eq!(count_with_priority(&refs, Priority::Medium), 1);
    }

    #[test]
    fn test_empty_counts_are_zero() {
        let none: Vec<ServiceRequest> = vec![];
        assert_eq!(count_by_status(&none), StatusCounters::default());
        assert_eq!(count_by_priority(&none), PriorityCounters::default());
    }
}
