// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The document models and their action catalogues.

pub mod facet;
pub mod resource_instance;
pub mod resource_template;
pub mod service_offering;
pub mod service_subscription;
pub mod subscription_instance;

pub use facet::Facet;
pub use resource_instance::ResourceInstance;
pub use resource_template::ResourceTemplate;
pub use service_offering::ServiceOffering;
pub use service_subscription::ServiceSubscription;
pub use subscription_instance::SubscriptionInstance;
