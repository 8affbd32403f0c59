/*!
# `GOTO <line number>`

## Purpose
Jump to a line.

## Remarks
Execution continues at the first statement of the line. A missing
line is an `UNDEFINED LINE` error. From direct mode, `GOTO` starts
the program without clearing variables.

## Example
```text
10 PRINT "TICK"
20 GOTO 10
RUN
TICK
TICK
TICK
?BREAK IN 10
```

*/
