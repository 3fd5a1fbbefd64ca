//! Pure reductions over blog collections. These run over query results,
//! never during mutation.

use crate::database::models::blog::BlogRecord;

/// Sum of likes across the collection; an empty collection sums to zero.
pub fn total_likes(blogs: &[BlogRecord]) -> i64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The most-liked blog. The comparison is strict less-than, so the earliest
/// maximum in input order wins ties; an empty collection yields `None`.
pub fn favorite_blog(blogs: &[BlogRecord]) -> Option<&BlogRecord> {
    blogs.iter().reduce(|favorite, blog| {
        if favorite.likes < blog.likes {
            blog
        } else {
            favorite
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn blog(title: &str, likes: i64) -> BlogRecord {
        BlogRecord {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: String::from("Ryan Holiday"),
            url: String::from("url"),
            likes,
            user: Uuid::new_v4().to_string(),
            comments: Vec::new(),
        }
    }

    fn initial_blogs() -> Vec<BlogRecord> {
        vec![
            blog("Daily Stoic", 438270),
            blog("Motivational blog", 23),
            blog("Technical blog", 20000),
        ]
    }

    #[test]
    fn total_likes_of_empty_list_is_zero() {
        assert_eq!(total_likes(&[]), 0);
    }

    #[test]
    fn total_likes_of_a_single_blog_equals_its_likes() {
        let blogs = vec![blog("Daily Stoic", 438270)];
        assert_eq!(total_likes(&blogs), 438270);
    }

    #[test]
    fn total_likes_of_a_bigger_list_is_calculated_right() {
        assert_eq!(total_likes(&initial_blogs()), 458293);
    }

    #[test]
    fn favorite_of_empty_list_is_none() {
        assert!(favorite_blog(&[]).is_none());
    }

    #[test]
    fn favorite_blog_has_the_most_likes() {
        let blogs = initial_blogs();
        let favorite = favorite_blog(&blogs).unwrap();

        assert_eq!(favorite.title, "Daily Stoic");
        assert!(blogs.iter().all(|other| other.likes <= favorite.likes));
    }

    #[test]
    fn first_maximum_wins_ties() {
        let blogs = vec![
            blog("Motivational blog", 23),
            blog("First of the tied", 20000),
            blog("Second of the tied", 20000),
        ];

        let favorite = favorite_blog(&blogs).unwrap();
        assert_eq!(favorite.title, "First of the tied");
    }
}
