//! Static naming conventions for platform-owned resource types.

use std::collections::HashMap;
use std::sync::OnceLock;

const APPS: &str = "apps";
const AUTOSCALING: &str = "autoscaling";
const BATCH: &str = "batch";
const CORE: &str = "core";
const DISCOVERY: &str = "discovery";
const NETWORKING: &str = "networking";
const POLICY: &str = "policy";
const RBAC: &str = "rbac";
const SCHEDULING: &str = "scheduling";
const STORAGE: &str = "storage";

/// Import root of the builtin API packages.
pub const API_ROOT: &str = "k8s.io/api";

/// Groups ending with this suffix belong to the platform.
pub const RESERVED_GROUP_SUFFIX: &str = ".k8s.io";

const KIND_GROUPS: &[(&str, &str)] = &[
    ("Deployment", APPS),
    ("StatefulSet", APPS),
    ("ReplicaSet", APPS),
    ("DaemonSet", APPS),
    ("HorizontalPodAutoscaler", AUTOSCALING),
    ("Job", BATCH),
    ("CronJob", BATCH),
    ("Binding", CORE),
    ("Pod", CORE),
    ("PodTemplate", CORE),
    ("Endpoints", CORE),
    ("ReplicationController", CORE),
    ("Node", CORE),
    ("Namespace", CORE),
    ("Service", CORE),
    ("ServiceAccount", CORE),
    ("ConfigMap", CORE),
    ("Secret", CORE),
    ("LimitRange", CORE),
    ("ResourceQuota", CORE),
    ("PersistentVolume", CORE),
    ("PersistentVolumeClaim", CORE),
    ("EndpointSlice", DISCOVERY),
    ("Ingress", NETWORKING),
    ("IngressClass", NETWORKING),
    ("NetworkPolicy", NETWORKING),
    ("PodDisruptionBudget", POLICY),
    ("Role", RBAC),
    ("RoleBinding", RBAC),
    ("ClusterRole", RBAC),
    ("ClusterRoleBinding", RBAC),
    ("PriorityClass", SCHEDULING),
    ("CSIDriver", STORAGE),
    ("CSINode", STORAGE),
    ("CSIStorageCapacity", STORAGE),
    ("StorageClass", STORAGE),
];

const SCHEMA_GROUPS: &[(&str, &str)] = &[
    (CORE, ""),
    (DISCOVERY, "discovery.k8s.io"),
    (NETWORKING, "networking.k8s.io"),
    (RBAC, "rbac.authorization.k8s.io"),
    (SCHEDULING, "scheduling.k8s.io"),
    (STORAGE, "storage.k8s.io"),
];

const RESERVED_GROUPS: &[&str] = &[
    APPS,
    AUTOSCALING,
    BATCH,
    CORE,
    DISCOVERY,
    NETWORKING,
    POLICY,
    RBAC,
    SCHEDULING,
    STORAGE,
    "v1",
];

/// Immutable lookup tables consulted during identity resolution.
///
/// Built once per process; resolvers borrow them so that resolution stays a
/// pure function of the declaration and the tables.
#[derive(Debug)]
pub struct ConventionTables {
    kind_groups: HashMap<&'static str, &'static str>,
    schema_groups: HashMap<&'static str, &'static str>,
    reserved_groups: &'static [&'static str],
}

impl ConventionTables {
    /// The platform's builtin conventions.
    pub fn builtin() -> &'static ConventionTables {
        static TABLES: OnceLock<ConventionTables> = OnceLock::new();
        TABLES.get_or_init(|| ConventionTables {
            kind_groups: KIND_GROUPS.iter().copied().collect(),
            schema_groups: SCHEMA_GROUPS.iter().copied().collect(),
            reserved_groups: RESERVED_GROUPS,
        })
    }

    /// Package group of a builtin kind, if the kind is known.
    pub fn group_for_kind(&self, kind: &str) -> Option<&'static str> {
        self.kind_groups.get(kind).copied()
    }

    /// API group used on the wire; groups without an entry map to themselves.
    pub fn schema_group(&self, group: &str) -> String {
        self.schema_groups.get(group).map_or_else(|| group.to_string(), |g| g.to_string())
    }

    /// Whether a group name is owned by the platform.
    pub fn is_reserved_group(&self, group: &str) -> bool {
        self.reserved_groups.contains(&group) || group.ends_with(RESERVED_GROUP_SUFFIX)
    }

    /// Import path of a builtin group at a given version.
    pub fn builtin_package(&self, group: &str, version: &str) -> String {
        format!("{API_ROOT}/{group}/{version}")
    }

    /// Reserved group names, for error messages.
    pub fn reserved_groups(&self) -> String {
        self.reserved_groups.join(", ")
    }
}
