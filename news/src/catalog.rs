//! The shipped press releases.
//!
//! DESIGN
//! ======
//! Records are literals compiled into the binary. There is no runtime
//! create/update/delete path, so lookups hand out `'static` borrows and every
//! listing operation works on slices of this array.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use time::macros::date;

use crate::article::{Article, Category, NewsError};

/// Every newsroom record, in authoring order (not publication order).
pub static ARTICLES: [Article; 4] = [
    Article {
        id: 1,
        slug: "brightline-launches-fleet-insights",
        title: "Brightline Launches Fleet Insights for Real-Time Energy Monitoring",
        excerpt: "The new platform gives commercial fleet operators a live view of charging costs, battery health and route efficiency across every vehicle.",
        body: r"Brightline today announced the general availability of **Fleet Insights**, a monitoring platform that brings charging, battery and route telemetry for electric commercial fleets into a single live dashboard.

## What ships today

- Live charging cost tracking per depot, per vehicle and per shift
- Battery health scoring that flags degradation weeks before it affects range
- Route efficiency reports that compare planned and actual energy use

Fleet Insights connects to the charging hardware operators already run. Early customers completed their rollout in under two weeks without replacing a single charger.

> We built Fleet Insights because operators kept telling us they were flying blind between the depot and the invoice.

## Availability

Fleet Insights is available now in North America and Europe. Existing Brightline customers can enable it from their account settings at no additional cost through the end of the year.",
        category: Category::Product,
        image: "/images/news/fleet-insights.jpg",
        published: date!(2025 - 05 - 20),
        source: None,
    },
    Article {
        id: 2,
        slug: "brightline-partners-with-northgrid-utilities",
        title: "Brightline and Northgrid Utilities Partner on Smart Depot Charging",
        excerpt: "A multi-year agreement pairs Brightline software with Northgrid demand-response programs to cut peak load at commercial depots.",
        body: r"Brightline and Northgrid Utilities have signed a multi-year agreement to coordinate depot charging with Northgrid's demand-response programs.

Under the agreement, Brightline schedules overnight charging around grid conditions published by Northgrid in real time. Operators keep full control of departure readiness while shifting load away from peak windows.

## Pilot results

During a six-month pilot across three depots, participating fleets:

1. Reduced peak demand charges by 31 percent
2. Kept departure readiness above 99 percent
3. Earned demand-response credits that offset software costs

The program opens to all Northgrid commercial customers this summer.",
        category: Category::Partnerships,
        image: "/images/news/northgrid-partnership.jpg",
        published: date!(2025 - 04 - 08),
        source: None,
    },
    Article {
        id: 3,
        slug: "brightline-opens-european-headquarters",
        title: "Brightline Opens European Headquarters in Amsterdam",
        excerpt: "The new office anchors Brightline's expansion across the EU and will house engineering, customer success and sales teams.",
        body: r"Brightline has opened its European headquarters in Amsterdam, its first office outside North America.

The Amsterdam team will lead engineering for EU charging standards, customer success for European fleets and regional partnerships with utilities and charge point operators.

## Growing the team

Brightline plans to hire 60 people in Amsterdam over the next eighteen months. Open roles are listed on the careers page.

The office is located in the Houthavens district and is powered entirely by renewable energy.",
        category: Category::Announcements,
        image: "/images/news/amsterdam-office.jpg",
        published: date!(2025 - 03 - 04),
        source: None,
    },
    Article {
        id: 4,
        slug: "brightline-named-top-climate-startup",
        title: "Brightline Named One of the Top Climate Tech Startups to Watch",
        excerpt: "GreenTech Weekly recognized Brightline for helping commercial fleets electrify without rebuilding their depot infrastructure.",
        body: r"GreenTech Weekly has named Brightline to its annual list of climate tech startups to watch.

The editors highlighted Brightline's hardware-agnostic approach, which lets operators electrify on the chargers they already own instead of committing to a single vendor.

Read the full list on the GreenTech Weekly website.",
        category: Category::PressCoverage,
        image: "/images/news/greentech-recognition.jpg",
        published: date!(2025 - 01 - 15),
        source: Some("GreenTech Weekly"),
    },
];

/// The full catalog.
#[must_use]
pub fn all() -> &'static [Article] {
    &ARTICLES
}

/// Look up a record by its slug.
///
/// # Errors
///
/// Returns [`NewsError::NotFound`] when no record carries `slug`.
pub fn find_by_slug(slug: &str) -> Result<&'static Article, NewsError> {
    ARTICLES
        .iter()
        .find(|article| article.slug == slug)
        .ok_or_else(|| NewsError::NotFound(slug.to_owned()))
}
