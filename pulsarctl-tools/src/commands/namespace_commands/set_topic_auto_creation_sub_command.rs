// Copyright 2023 The Pulsarctl Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Args;
use pulsarctl_error::CtlError;
use pulsarctl_error::CtlResult;

use crate::admin::api::TopicAutoCreationConfig;
use crate::admin::api::TopicType;
use crate::cli::validators::validate_partitions;
use crate::cmdutils::CommandDescriptor;
use crate::cmdutils::NameBinding;
use crate::cmdutils::VerbCmd;
use crate::cmdutils::VerbContext;
use crate::commands::namespace_commands::MISSING_NAMESPACE_NAME;
use crate::commands::namespace_commands::NAMESPACE_NOT_EXIST;
use crate::commands::namespace_commands::NAMESPACE_PERMISSION;

#[derive(Debug, Clone, Args)]
pub struct SetTopicAutoCreationFlags {
    #[arg(long = "enable", conflicts_with = "disable", help = "Enable topic auto-creation")]
    enable: bool,

    #[arg(long = "disable", help = "Disable topic auto-creation")]
    disable: bool,

    #[arg(
        long = "type",
        default_value = "non-partitioned",
        help = "Type of topic to be auto-created, possible values: (partitioned, non-partitioned)"
    )]
    topic_type: String,

    #[arg(long = "partitions", help = "Default number of partitions of topic to be auto-created")]
    partitions: Option<u32>,
}

impl SetTopicAutoCreationFlags {
    fn into_config(self) -> CtlResult<TopicAutoCreationConfig> {
        if self.enable == self.disable {
            return Err(CtlError::invalid_argument("exactly one of --enable or --disable must be specified"));
        }
        let topic_type: TopicType = self.topic_type.parse()?;
        let partitions = match (topic_type, self.partitions) {
            (TopicType::Partitioned, Some(partitions)) => {
                validate_partitions(partitions)?;
                Some(partitions)
            }
            (TopicType::Partitioned, None) => {
                return Err(CtlError::invalid_argument(
                    "--partitions is required when the topic type is partitioned",
                ))
            }
            (TopicType::NonPartitioned, Some(_)) => {
                return Err(CtlError::invalid_argument(
                    "--partitions is only valid when the topic type is partitioned",
                ))
            }
            (TopicType::NonPartitioned, None) => None,
        };
        Ok(TopicAutoCreationConfig {
            allow: self.enable,
            topic_type: Some(topic_type),
            partitions,
        })
    }
}

pub fn set_topic_auto_creation_cmd() -> VerbCmd {
    let desc = CommandDescriptor::new("Set topic auto-creation config for a namespace, overriding broker settings")
        .permission(NAMESPACE_PERMISSION)
        .example(
            "Enable topic auto-creation of partitioned topics with 4 partitions",
            "pulsarctl namespaces set-topic-auto-creation tenant/namespace --enable --type partitioned --partitions 4",
        )
        .example(
            "Disable topic auto-creation",
            "pulsarctl namespaces set-topic-auto-creation tenant/namespace --disable",
        )
        .output(
            "normal output",
            "Set topic auto-creation config successfully for [tenant/namespace]",
        )
        .output(
            "you must specify a tenant/namespace name, please check if the tenant/namespace name is provided",
            format!("[✖]  {MISSING_NAMESPACE_NAME}"),
        )
        .output(NAMESPACE_NOT_EXIST.0, NAMESPACE_NOT_EXIST.1);

    VerbCmd::new(
        "set-topic-auto-creation",
        "Set topic auto-creation config for a namespace",
        desc,
        NameBinding::RequiresNamespace {
            missing: MISSING_NAMESPACE_NAME,
        },
        do_set_topic_auto_creation,
    )
    .with_flags(SetTopicAutoCreationFlags::augment_args)
}

fn do_set_topic_auto_creation(ctx: &mut VerbContext<'_>) -> CtlResult<()> {
    let flags: SetTopicAutoCreationFlags = ctx.flags()?;
    let config = flags.into_config()?;
    let namespace = ctx.namespace_name()?.clone();
    ctx.admin().namespaces().set_topic_auto_creation(&namespace, &config)?;
    writeln!(
        ctx.out(),
        "Set topic auto-creation config successfully for [{namespace}]"
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pulsarctl_error::ErrorKind;

    use super::*;

    fn flags(enable: bool, disable: bool, topic_type: &str, partitions: Option<u32>) -> SetTopicAutoCreationFlags {
        SetTopicAutoCreationFlags {
            enable,
            disable,
            topic_type: topic_type.to_string(),
            partitions,
        }
    }

    #[test]
    fn test_partitioned_config() {
        let config = flags(true, false, "partitioned", Some(4)).into_config().unwrap();
        assert!(config.allow);
        assert_eq!(config.topic_type, Some(TopicType::Partitioned));
        assert_eq!(config.partitions, Some(4));
    }

    #[test]
    fn test_disable_defaults_to_non_partitioned() {
        let config = flags(false, true, "non-partitioned", None).into_config().unwrap();
        assert!(!config.allow);
        assert_eq!(config.topic_type, Some(TopicType::NonPartitioned));
        assert_eq!(config.partitions, None);
    }

    #[test]
    fn test_invalid_combinations() {
        for f in [
            flags(false, false, "non-partitioned", None),
            flags(true, false, "partitioned", None),
            flags(true, false, "partitioned", Some(0)),
            flags(true, false, "non-partitioned", Some(2)),
            flags(true, false, "sharded", None),
        ] {
            assert_eq!(f.into_config().unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }
}
