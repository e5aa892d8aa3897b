//! Built-in sample content for the public reader's fallback.

use chrono::NaiveDate;

use quillpress_core::{PostId, PublicPost};

use crate::public::FallbackSource;

/// The fixed sample set served when the backend is unreachable.
///
/// Three posts, no pages: a public page lookup that falls back always
/// resolves to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplePosts;

impl FallbackSource for SamplePosts {
    fn posts(&self) -> Vec<PublicPost> {
        sample_posts()
    }

    fn page_by_slug(&self, _slug: &str) -> Option<quillpress_core::PublicPage> {
        None
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn sample_posts() -> Vec<PublicPost> {
    vec![
        PublicPost {
            id: PostId::new(1),
            slug: "getting-started-with-headless-cms".to_string(),
            title: "Getting Started with Headless CMS".to_string(),
            excerpt: "Learn how to build modern web applications with a headless CMS architecture."
                .to_string(),
            content: r"# Getting Started with Headless CMS

A headless CMS separates the content management backend from the frontend presentation layer. This approach offers several advantages:

## Benefits

- **Flexibility**: Use any frontend framework or technology
- **Scalability**: Distribute content across multiple platforms
- **Performance**: Optimize each layer independently
- **Developer Experience**: Modern APIs and workflows

## Architecture

The headless approach allows you to:

1. Create content in a centralized system
2. Access it via REST or GraphQL APIs
3. Render it anywhere - web, mobile, IoT devices

## Getting Started

Start by choosing a headless CMS platform that fits your needs. Popular options include Strapi, Contentful, and Sanity."
                .to_string(),
            author: "Sarah Johnson".to_string(),
            published_at: date(2025, 1, 15),
            cover_image: Some(
                "https://images.pexels.com/photos/1181467/pexels-photo-1181467.jpeg?auto=compress&cs=tinysrgb&w=1200"
                    .to_string(),
            ),
            tags: vec![
                "CMS".to_string(),
                "Architecture".to_string(),
                "Tutorial".to_string(),
            ],
        },
        PublicPost {
            id: PostId::new(2),
            slug: "modern-web-development-trends".to_string(),
            title: "Modern Web Development Trends 2025".to_string(),
            excerpt: "Explore the latest trends shaping web development in 2025.".to_string(),
            content: r"# Modern Web Development Trends 2025

The web development landscape continues to evolve rapidly. Here are the key trends defining 2025:

## 1. Edge Computing

Moving computation closer to users for better performance and lower latency.

## 2. AI Integration

AI-powered features are becoming standard, from content generation to personalized experiences.

## 3. Web Components

Framework-agnostic components are gaining traction for better reusability.

## 4. Jamstack Evolution

The Jamstack architecture continues to mature with better tooling and patterns.

## Conclusion

Staying current with these trends helps you build better, faster, and more maintainable applications."
                .to_string(),
            author: "Michael Chen".to_string(),
            published_at: date(2025, 1, 10),
            cover_image: Some(
                "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=1200"
                    .to_string(),
            ),
            tags: vec![
                "Web Development".to_string(),
                "Trends".to_string(),
                "2025".to_string(),
            ],
        },
        PublicPost {
            id: PostId::new(3),
            slug: "building-scalable-apis".to_string(),
            title: "Building Scalable REST APIs".to_string(),
            excerpt: "Best practices for designing and implementing scalable REST APIs.".to_string(),
            content: r"# Building Scalable REST APIs

Creating APIs that can grow with your application requires careful planning and best practices.

## Key Principles

### 1. Design First

Plan your API structure before writing code. Use OpenAPI specifications.

### 2. Versioning

Always version your APIs to maintain backward compatibility.

### 3. Rate Limiting

Protect your infrastructure with appropriate rate limits.

### 4. Caching

Implement caching strategies to reduce load and improve response times.

## Best Practices

- Use consistent naming conventions
- Implement proper error handling
- Document everything
- Monitor performance metrics

## Conclusion

A well-designed API is the foundation of a successful application ecosystem."
                .to_string(),
            author: "Emily Rodriguez".to_string(),
            published_at: date(2025, 1, 5),
            cover_image: Some(
                "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=1200"
                    .to_string(),
            ),
            tags: vec![
                "API".to_string(),
                "Backend".to_string(),
                "Best Practices".to_string(),
            ],
        },
    ]
}
